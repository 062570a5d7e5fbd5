use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid JSON specification - {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;

impl From<std::io::Error> for SpecError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
