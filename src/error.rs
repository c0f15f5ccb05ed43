use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Entries page fetch failed with status {status}: {body}")]
    FetchFailed { status: StatusCode, body: String },

    #[error("Cache file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected page structure: {0}")]
    PageStructure(String),

    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Email delivery failed with status {status}: {body}")]
    EmailDelivery { status: StatusCode, body: String },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
