use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Country code resolver failed: {0}")]
    CountryCode(#[source] anyhow::Error),

    #[error("Type resolver failed: {0}")]
    PlaceType(#[source] anyhow::Error),

    #[error("Value formatter failed: {0}")]
    Format(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
