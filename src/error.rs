#[derive(Debug, thiserror::Error)]
pub enum LaunchpadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, LaunchpadError>;
