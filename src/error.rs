use thiserror::Error;

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum AppError {
    #[error("Malformed catalog source: {0}")]
    MalformedSource(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Preference storage failed: {0}")]
    PersistenceError(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
