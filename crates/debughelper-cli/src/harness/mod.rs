mod atomic;
mod inputs;
mod logging;

pub use atomic::write_json_atomic;
pub use inputs::{coerce_declared_types, load_items, load_parameters, parse_param};
pub use logging::init_logging;

use thiserror::Error;

/// Errors raised while preparing a local node run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}

pub type HarnessResult<T> = std::result::Result<T, HarnessError>;
