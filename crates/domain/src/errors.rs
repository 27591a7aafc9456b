use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Cache error: {0}")]
    Cache(String),
}

impl From<String> for DomainError {
    fn from(msg: String) -> Self {
        DomainError::InvalidInput(msg)
    }
}
