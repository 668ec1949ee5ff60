//! Fallback across equivalent routes.
//!
//! Deployments disagree on a few paths (`manual-scores` vs `manual_scores`,
//! counselor- vs admin-scoped student lists). Each resource declares its
//! candidates once; `probe` walks them in order.

use crate::{ClientError, ClientResult};

use std::future::Future;

use log::{debug, warn};
use serde_json::Value;

/// Ordered, statically declared alternatives for one logical endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateRoutes {
    pub name: &'static str,
    pub paths: &'static [&'static str],
}

impl CandidateRoutes {
    pub const fn new(name: &'static str, paths: &'static [&'static str]) -> Self {
        Self { name, paths }
    }
}

pub const MANUAL_SCORE_ROUTES: CandidateRoutes = CandidateRoutes::new(
    "manual scores",
    &[
        "/counselor/manual-scores",
        "/counselor/manual_scores",
        "/manual-scores",
    ],
);

pub const STUDENT_DIRECTORY_ROUTES: CandidateRoutes = CandidateRoutes::new(
    "student directory",
    &["/counselor/students", "/students", "/admin/students"],
);

/// Try each candidate in order.
///
/// A 404 or 405 moves on to the next path; any other error stops the walk
/// and is returned as-is. When every path misses, the last miss is returned.
pub async fn probe<T, F, Fut>(routes: &CandidateRoutes, mut attempt: F) -> ClientResult<T>
where
    F: FnMut(&'static str) -> Fut,
    Fut: Future<Output = ClientResult<T>>,
{
    let mut last_miss: Option<ClientError> = None;

    for &path in routes.paths {
        match attempt(path).await {
            Ok(value) => {
                debug!("{}: resolved via {}", routes.name, path);
                return Ok(value);
            }
            Err(e) if e.is_route_miss() => {
                warn!(
                    "{}: {} returned {}, trying next candidate",
                    routes.name,
                    path,
                    e.status().unwrap_or_default()
                );
                last_miss = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    debug!("{}: no candidate route responded", routes.name);
    Err(last_miss.unwrap_or_else(|| {
        ClientError::api(
            404,
            format!("No route available for {}", routes.name),
            Value::Null,
        )
    }))
}
