use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use debughelper_core::{
    IssueSeverity, NodeDefaults, NodeDescription, NodeProperty, PropertyOption, json_schema_for,
    validate_description, validate_parameters,
};

#[allow(dead_code)]
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SampleParameters {
    #[serde(default)]
    mode: Option<Mode>,
    #[serde(default)]
    retry_count: Option<u32>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
enum Mode {
    Fast,
    Slow,
}

fn description(properties: Vec<NodeProperty>) -> NodeDescription {
    NodeDescription {
        display_name: "Sample".to_string(),
        name: "sample".to_string(),
        icon: None,
        group: vec!["output".to_string()],
        subtitle: None,
        description: "sample".to_string(),
        version: 1,
        defaults: NodeDefaults {
            name: "Sample".to_string(),
        },
        inputs: vec!["main".to_string()],
        outputs: vec!["main".to_string()],
        properties,
    }
}

#[test]
fn valid_parameters_produce_empty_report() {
    let schema = json_schema_for::<SampleParameters>().expect("schema");
    let report =
        validate_parameters(&json!({"mode": "fast", "retryCount": 2}), &schema).expect("validate");
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
}

#[test]
fn schema_violations_are_reported_with_paths() {
    let schema = json_schema_for::<SampleParameters>().expect("schema");
    let report = validate_parameters(&json!({"mode": "medium", "retryCount": -1}), &schema)
        .expect("validate");

    assert!(!report.is_ok());
    let paths: Vec<_> = report.errors.iter().map(|issue| issue.path.as_str()).collect();
    assert!(paths.contains(&"/mode"), "paths: {paths:?}");
    assert!(paths.contains(&"/retryCount"), "paths: {paths:?}");
    assert!(
        report
            .errors
            .iter()
            .all(|issue| issue.severity == IssueSeverity::Error)
    );
}

#[test]
fn unknown_parameters_are_rejected() {
    let schema = json_schema_for::<SampleParameters>().expect("schema");
    let report = validate_parameters(&json!({"colour": "red"}), &schema).expect("validate");
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "/");
}

#[test]
fn description_checks_catch_inconsistent_properties() {
    let description = description(vec![
        NodeProperty::options(
            "Mode",
            "mode",
            "turbo",
            vec![PropertyOption::new("Fast", "fast")],
        ),
        NodeProperty::string("Label", "label", "").shown_for("kind", &["a"]),
        NodeProperty::string("Label", "label", ""),
    ]);

    let report = validate_description(&description);
    let codes: Vec<_> = report.errors.iter().map(|issue| issue.code.as_str()).collect();
    assert!(codes.contains(&"unknown_default"));
    assert!(codes.contains(&"unknown_display_reference"));
    assert!(codes.contains(&"duplicate_property"));
    assert!(!report.warnings.is_empty());
}

#[test]
fn consistent_description_passes() {
    let description = description(vec![
        NodeProperty::options(
            "Mode",
            "mode",
            "fast",
            vec![
                PropertyOption::new("Fast", "fast"),
                PropertyOption::new("Slow", "slow"),
            ],
        ),
        NodeProperty::number("Retries", "retries", 3.0)
            .with_description("How often to retry")
            .shown_for("mode", &["slow"]),
    ]);

    let report = validate_description(&description);
    assert!(report.is_ok(), "errors: {:?}", report.errors);
    assert!(report.warnings.is_empty());
}
