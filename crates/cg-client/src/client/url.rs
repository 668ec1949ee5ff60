use crate::{ClientError, ClientResult};

/// Join a base origin and a relative path with exactly one `/`.
///
/// Fails with a configuration error when the base is blank, so no request is
/// ever sent to a malformed URL.
#[track_caller]
pub fn resolve_url(base: &str, path: &str) -> ClientResult<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(ClientError::config(
            "API base URL is not configured (set CG_API_BASE_URL)",
        ));
    }

    let path = path.trim().trim_start_matches('/');
    Ok(format!("{base}/{path}"))
}
