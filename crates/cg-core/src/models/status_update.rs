use serde::Serialize;

/// Body for PATCH endpoints that move a record through its workflow
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
