use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The server-held credential is absent. Never retried.
    #[error("Server misconfiguration: NEWS_API_KEY is not set.")]
    MissingApiKey,

    /// NewsAPI answered with a non-success status.
    #[error("Upstream error from NewsAPI: {status} {status_text}")]
    Upstream {
        status: u16,
        status_text: String,
        detail: String,
    },

    /// Network-level failure reaching NewsAPI.
    #[error("Failed to fetch from NewsAPI: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
