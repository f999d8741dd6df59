use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use debughelper_generate::RandomDataType;

pub const CATEGORY: &str = "category";
pub const THROW_ERROR_TYPE: &str = "throwErrorType";
pub const THROW_ERROR_MESSAGE: &str = "throwErrorMessage";
pub const MEMORY_SIZE_VALUE: &str = "memorySizeValue";
pub const RANDOM_DATA_TYPE: &str = "randomDataType";
pub const RANDOM_DATA_SEED: &str = "randomDataSeed";
pub const RANDOM_DATA_COUNT: &str = "randomDataCount";

pub const DEFAULT_ERROR_MESSAGE: &str = "Node has thrown an error";
pub const DEFAULT_MEMORY_SIZE_MIB: f64 = 10.0;
pub const DEFAULT_RANDOM_DATA_COUNT: u32 = 10;

/// What the node does with each item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Pass items through untouched.
    DoNothing,
    /// Fail with the configured error shape.
    #[default]
    ThrowError,
    /// Allocate memory and report usage.
    Oom,
    /// Replace each item with generated fixture records.
    RandomData,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::DoNothing,
        Category::ThrowError,
        Category::Oom,
        Category::RandomData,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DoNothing => "doNothing",
            Self::ThrowError => "throwError",
            Self::Oom => "oom",
            Self::RandomData => "randomData",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::DoNothing => "Do Nothing",
            Self::ThrowError => "Throw Error",
            Self::Oom => "Out Of Memory",
            Self::RandomData => "Generate Random Data",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::DoNothing => "Does nothing",
            Self::ThrowError => "Throws an error with the specified type and message",
            Self::Oom => "Generates a large amount of memory to cause an out of memory error",
            Self::RandomData => "Generates random data sets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error shape raised by the `throwError` category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ThrowErrorType {
    #[default]
    NodeApiError,
    NodeOperationError,
    Error,
}

impl ThrowErrorType {
    pub const ALL: [ThrowErrorType; 3] = [
        ThrowErrorType::NodeApiError,
        ThrowErrorType::NodeOperationError,
        ThrowErrorType::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NodeApiError => "NodeApiError",
            Self::NodeOperationError => "NodeOperationError",
            Self::Error => "Error",
        }
    }
}

/// Full parameter set of the node, used to derive the parameter JSON Schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DebugHelperParameters {
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub throw_error_type: ThrowErrorType,
    /// Message carried by the thrown error.
    #[serde(default = "default_error_message")]
    pub throw_error_message: String,
    /// Approximate amount of memory to allocate, in MiB.
    #[serde(default = "default_memory_size")]
    #[schemars(range(min = 0))]
    pub memory_size_value: f64,
    #[serde(default)]
    pub random_data_type: RandomDataType,
    /// Seed for the generator; empty means a fresh random seed.
    #[serde(default)]
    pub random_data_seed: String,
    /// Number of records generated per item.
    #[serde(
        default = "default_random_data_count",
        deserialize_with = "deserialize_record_count"
    )]
    pub random_data_count: u32,
}

impl Default for DebugHelperParameters {
    fn default() -> Self {
        Self {
            category: Category::default(),
            throw_error_type: ThrowErrorType::default(),
            throw_error_message: default_error_message(),
            memory_size_value: DEFAULT_MEMORY_SIZE_MIB,
            random_data_type: RandomDataType::default(),
            random_data_seed: String::new(),
            random_data_count: DEFAULT_RANDOM_DATA_COUNT,
        }
    }
}

fn default_error_message() -> String {
    DEFAULT_ERROR_MESSAGE.to_string()
}

fn default_memory_size() -> f64 {
    DEFAULT_MEMORY_SIZE_MIB
}

fn default_random_data_count() -> u32 {
    DEFAULT_RANDOM_DATA_COUNT
}

/// Convert a host number into a record count.
///
/// Hosts send every `number` parameter as a float, so `2` and `2.0` are the
/// same count. Fractions, negatives and values beyond `u32` are rejected.
pub fn record_count(value: f64) -> std::result::Result<u32, String> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(format!("expected a non-negative whole number, got {value}"));
    }
    Ok(value as u32)
}

fn deserialize_record_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    record_count(value).map_err(serde::de::Error::custom)
}
