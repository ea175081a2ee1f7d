use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnagramError {
    #[error("invalid input: both texts are required")]
    InvalidInput,
    #[error("'{0}' is not a valid replacement mode")]
    InvalidMode(String),
}

pub type Result<T> = std::result::Result<T, AnagramError>;
