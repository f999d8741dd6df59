use std::collections::BTreeSet;

use jsonschema::JSONSchema;
use schemars::JsonSchema;
use serde_json::Value;

use crate::description::{NodeDescription, PropertyType};
use crate::error::{NodeError, Result};

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location and hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    pub hint: Option<String>,
}

impl ValidationIssue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint,
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }
}

/// Emit the JSON Schema for a parameter struct as a JSON value.
pub fn json_schema_for<T: JsonSchema>() -> Result<Value> {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(&schema).map_err(|err| NodeError::Schema(err.to_string()))
}

/// Validate parameter values against a JSON Schema.
///
/// Every violation becomes an error issue; the schema itself failing to
/// compile is reported as [`NodeError::Schema`].
pub fn validate_parameters(parameters: &Value, schema: &Value) -> Result<ValidationReport> {
    let compiled = JSONSchema::compile(schema).map_err(|err| NodeError::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();
    if let Err(errors) = compiled.validate(parameters) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                path,
                error.to_string(),
                None,
            ));
        }
    }

    tracing::debug!(
        event = "parameters_validated",
        errors = report.errors.len(),
        warnings = report.warnings.len()
    );
    Ok(report)
}

/// Check internal consistency of a node description.
///
/// This checks:
/// - property names are unique
/// - `options` properties list at least one option and default to one of them
/// - display rules only reference declared properties
/// - `number` properties default to a number
pub fn validate_description(description: &NodeDescription) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut names = BTreeSet::new();

    for (index, property) in description.properties.iter().enumerate() {
        let path = format!("/properties/{index}");
        if !names.insert(property.name.as_str()) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "duplicate_property",
                &path,
                format!("duplicate property name: {}", property.name),
                None,
            ));
        }

        match property.kind {
            PropertyType::Options => {
                if property.options.is_empty() {
                    report.push_error(ValidationIssue::new(
                        IssueSeverity::Error,
                        "empty_options",
                        &path,
                        format!("options property has no options: {}", property.name),
                        None,
                    ));
                }
                let default = property.default.as_str().unwrap_or_default();
                if !property.option_values().any(|value| value == default) {
                    report.push_error(ValidationIssue::new(
                        IssueSeverity::Error,
                        "unknown_default",
                        format!("{path}/default"),
                        format!(
                            "default '{}' is not an option of {}",
                            property.default, property.name
                        ),
                        Some("use one of the declared option values".to_string()),
                    ));
                }
            }
            PropertyType::Number if !property.default.is_number() => {
                report.push_error(ValidationIssue::new(
                    IssueSeverity::Error,
                    "invalid_default",
                    format!("{path}/default"),
                    format!("number property {} has a non-numeric default", property.name),
                    None,
                ));
            }
            _ => {}
        }
    }

    for (index, property) in description.properties.iter().enumerate() {
        let Some(display) = &property.display_options else {
            continue;
        };
        for parameter in display.show.keys() {
            if !names.contains(parameter.as_str()) {
                report.push_error(ValidationIssue::new(
                    IssueSeverity::Error,
                    "unknown_display_reference",
                    format!("/properties/{index}/displayOptions/show/{parameter}"),
                    format!(
                        "{} is shown based on undeclared parameter {parameter}",
                        property.name
                    ),
                    None,
                ));
            }
        }
        if property.kind != PropertyType::Options && property.description.is_none() {
            report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "missing_description",
                format!("/properties/{index}"),
                format!("{} has no description", property.name),
                None,
            ));
        }
    }

    report
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
