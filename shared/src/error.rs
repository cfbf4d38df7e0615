use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Missing field `{field}` on {node}")]
    MissingField { node: String, field: String },

    #[error("Post `{0}` has no authors")]
    MissingAuthor(String),

    #[error("Invalid date `{0}`")]
    InvalidDate(String),

    #[error("Failed to parse content: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContentError {
    pub fn missing(node: &str, field: &str) -> Self {
        ContentError::MissingField {
            node: node.to_string(),
            field: field.to_string(),
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;
