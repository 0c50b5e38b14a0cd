use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend returned HTTP status {status}")]
    BackendStatus { status: u16 },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures surfaced to the user as "cannot reach the backend":
    /// transport errors, non-2xx statuses, and undecodable bodies alike.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::BackendStatus { .. } | Self::Serialization(_)
        )
    }
}
