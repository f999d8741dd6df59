use serde_json::Value;

use debughelper_core::{Result, json_schema_for};

use crate::model::DebugHelperParameters;

/// Emit the JSON Schema for the node's parameters.
pub fn parameters_json_schema() -> Result<Value> {
    json_schema_for::<DebugHelperParameters>()
}
