use cg_core::CoreError;

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filters accepted by the backend's list endpoints.
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Reject ranges that end before they start
    #[track_caller]
    pub fn validate(&self) -> Result<(), CoreError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && start > end
        {
            return Err(CoreError::validation(
                "start_date",
                format!("start date {start} is after end date {end}"),
            ));
        }
        Ok(())
    }

    /// Query-string pairs in a fixed order
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        [
            ("page", self.page.map(|p| p.to_string())),
            ("per_page", self.per_page.map(|p| p.to_string())),
            ("status", text(&self.status)),
            ("search", text(&self.search)),
            (
                "start_date",
                self.start_date.map(|d| d.format(DATE_FORMAT).to_string()),
            ),
            (
                "end_date",
                self.end_date.map(|d| d.format(DATE_FORMAT).to_string()),
            ),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}
