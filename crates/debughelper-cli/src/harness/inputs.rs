use std::path::Path;

use serde_json::{Map, Value};

use debughelper_core::{Item, NodeDescription, PropertyType};

use super::{HarnessError, HarnessResult};

/// Load input items from a JSON file.
///
/// The file holds either an array of objects or a single object; each
/// object becomes the `json` of one item. Without a file the run gets one
/// empty item, like a manual trigger.
pub fn load_items(path: Option<&Path>) -> HarnessResult<Vec<Item>> {
    let Some(path) = path else {
        return Ok(vec![Item::input(0, Map::new())]);
    };

    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    let records = match value {
        Value::Array(records) => records,
        Value::Object(record) => vec![Value::Object(record)],
        other => {
            return Err(HarnessError::Invalid(format!(
                "{}: expected an object or an array of objects, found {}",
                path.display(),
                json_kind(&other)
            )));
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record {
            Value::Object(json) => Ok(Item::input(index, json)),
            other => Err(HarnessError::Invalid(format!(
                "{}: item {index} is {}, expected an object",
                path.display(),
                json_kind(&other)
            ))),
        })
        .collect()
}

/// Merge parameters from an optional TOML file with `NAME=VALUE` overrides.
/// Overrides win over file entries.
pub fn load_parameters(
    path: Option<&Path>,
    overrides: &[(String, Value)],
) -> HarnessResult<Map<String, Value>> {
    let mut parameters = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let table: toml::Table = toml::from_str(&content)?;
            match serde_json::to_value(table)? {
                Value::Object(map) => map,
                _ => {
                    return Err(HarnessError::Invalid(format!(
                        "{}: parameters must be a table",
                        path.display()
                    )));
                }
            }
        }
        None => Map::new(),
    };

    for (name, value) in overrides {
        parameters.insert(name.clone(), value.clone());
    }
    Ok(parameters)
}

/// Parse a `NAME=VALUE` flag. The value is read as JSON when it parses,
/// otherwise kept as a plain string.
pub fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.to_string(), value))
}

/// Turn scalars given for `string` properties back into strings, so
/// `--param randomDataSeed=42` means the seed "42" rather than a number.
pub fn coerce_declared_types(parameters: &mut Map<String, Value>, description: &NodeDescription) {
    for (name, value) in parameters.iter_mut() {
        let Some(property) = description.property(name) else {
            continue;
        };
        if property.kind == PropertyType::String {
            match value {
                Value::Number(number) => *value = Value::String(number.to_string()),
                Value::Bool(flag) => *value = Value::String(flag.to_string()),
                _ => {}
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use debughelper_core::NodeType;
    use debughelper_node::DebugHelper;

    use super::*;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn missing_input_yields_single_empty_item() {
        let items = load_items(None).expect("default items");
        assert_eq!(items.len(), 1);
        assert!(items[0].json.is_empty());
    }

    #[test]
    fn array_input_becomes_paired_items() {
        let file = file_with(r#"[{"a": 1}, {"b": 2}]"#);
        let items = load_items(Some(file.path())).expect("items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].json["b"], json!(2));
        assert_eq!(items[1].paired_item.map(|paired| paired.item), Some(1));
    }

    #[test]
    fn scalar_items_are_rejected() {
        let file = file_with(r#"[{"a": 1}, 3]"#);
        let result = load_items(Some(file.path()));
        assert!(matches!(result, Err(HarnessError::Invalid(message)) if message.contains("item 1")));
    }

    #[test]
    fn overrides_take_precedence_over_toml() {
        let file = file_with("category = \"oom\"\nmemorySizeValue = 2\n");
        let overrides = vec![parse_param("memorySizeValue=0.5").expect("valid flag")];
        let parameters = load_parameters(Some(file.path()), &overrides).expect("parameters");
        assert_eq!(parameters["category"], json!("oom"));
        assert_eq!(parameters["memorySizeValue"], json!(0.5));
    }

    #[test]
    fn parse_param_keeps_non_json_values_as_strings() {
        assert_eq!(
            parse_param("throwErrorMessage=it broke").expect("valid"),
            ("throwErrorMessage".to_string(), json!("it broke"))
        );
        assert_eq!(
            parse_param("randomDataCount=3").expect("valid"),
            ("randomDataCount".to_string(), json!(3))
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=3").is_err());
    }

    #[test]
    fn string_properties_are_coerced() {
        let description = DebugHelper.description();
        let mut parameters = Map::new();
        parameters.insert("randomDataSeed".to_string(), json!(42));
        parameters.insert("randomDataCount".to_string(), json!(5));
        coerce_declared_types(&mut parameters, &description);
        assert_eq!(parameters["randomDataSeed"], json!("42"));
        assert_eq!(parameters["randomDataCount"], json!(5));
    }
}
