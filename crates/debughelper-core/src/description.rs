use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Declarative schema a node registers with the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    /// Internal node name (ex.: `debugHelper`).
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub group: Vec<String>,
    /// Expression rendered under the node title in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    pub version: u32,
    pub defaults: NodeDefaults,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub properties: Vec<NodeProperty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefaults {
    pub name: String,
}

/// Kind of editor control backing a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Options,
    String,
    Number,
}

/// One selectable value of an `options` property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Visibility rules: the property is shown when every listed parameter
/// currently holds one of the listed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub show: BTreeMap<String, Vec<Value>>,
}

/// A user-facing node parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub default: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub no_data_expression: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
}

impl NodeProperty {
    fn new(
        display_name: impl Into<String>,
        name: impl Into<String>,
        kind: PropertyType,
        default: Value,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind,
            default,
            description: None,
            no_data_expression: true,
            options: Vec::new(),
            display_options: None,
        }
    }

    pub fn options(
        display_name: impl Into<String>,
        name: impl Into<String>,
        default: &str,
        options: Vec<PropertyOption>,
    ) -> Self {
        let mut property = Self::new(
            display_name,
            name,
            PropertyType::Options,
            Value::String(default.to_string()),
        );
        property.options = options;
        property
    }

    pub fn string(display_name: impl Into<String>, name: impl Into<String>, default: &str) -> Self {
        Self::new(
            display_name,
            name,
            PropertyType::String,
            Value::String(default.to_string()),
        )
    }

    pub fn number(display_name: impl Into<String>, name: impl Into<String>, default: f64) -> Self {
        // Whole numbers stay integers so they decode into integer parameters.
        let default = if default.fract() == 0.0 && default.abs() < i64::MAX as f64 {
            Value::from(default as i64)
        } else {
            serde_json::Number::from_f64(default)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        };
        Self::new(display_name, name, PropertyType::Number, default)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Show this property only when `parameter` holds one of `values`.
    pub fn shown_for(mut self, parameter: &str, values: &[&str]) -> Self {
        let display = self.display_options.get_or_insert_with(DisplayOptions::default);
        display.show.insert(
            parameter.to_string(),
            values.iter().map(|v| Value::String(v.to_string())).collect(),
        );
        self
    }

    /// Whether the property is visible given the current parameter values.
    /// Parameters absent from `values` are compared through their defaults
    /// in `fallback`.
    pub fn is_visible(&self, values: &Map<String, Value>, fallback: &Map<String, Value>) -> bool {
        let Some(display) = &self.display_options else {
            return true;
        };
        display.show.iter().all(|(parameter, allowed)| {
            values
                .get(parameter)
                .or_else(|| fallback.get(parameter))
                .is_some_and(|current| allowed.contains(current))
        })
    }

    pub fn option_values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.value.as_str())
    }
}

impl NodeDescription {
    pub fn property(&self, name: &str) -> Option<&NodeProperty> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Default value of every declared property.
    pub fn defaults_map(&self) -> Map<String, Value> {
        self.properties
            .iter()
            .map(|property| (property.name.clone(), property.default.clone()))
            .collect()
    }

    /// Properties the editor would show for the given parameter values.
    pub fn visible_properties<'a>(
        &'a self,
        values: &'a Map<String, Value>,
    ) -> impl Iterator<Item = &'a NodeProperty> + 'a {
        let fallback = self.defaults_map();
        self.properties
            .iter()
            .filter(move |property| property.is_visible(values, &fallback))
    }
}
