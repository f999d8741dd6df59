use thiserror::Error;

/// Errors emitted while selecting a generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unknown random data type '{0}'")]
    UnknownType(String),
}
