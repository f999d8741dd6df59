use debughelper_core::{NodeDefaults, NodeDescription, NodeProperty, PropertyOption};
use debughelper_generate::RandomDataType;

use crate::model::{
    CATEGORY, Category, DEFAULT_ERROR_MESSAGE, DEFAULT_MEMORY_SIZE_MIB,
    DEFAULT_RANDOM_DATA_COUNT, MEMORY_SIZE_VALUE, RANDOM_DATA_COUNT, RANDOM_DATA_SEED,
    RANDOM_DATA_TYPE, THROW_ERROR_MESSAGE, THROW_ERROR_TYPE, ThrowErrorType,
};

pub const DISPLAY_NAME: &str = "DebugHelper";
pub const NODE_NAME: &str = "debugHelper";

/// Declarative schema the DebugHelper node registers with the host.
pub fn node_description() -> NodeDescription {
    NodeDescription {
        display_name: DISPLAY_NAME.to_string(),
        name: NODE_NAME.to_string(),
        icon: Some("file:DebugHelper.svg".to_string()),
        group: vec!["output".to_string()],
        subtitle: Some(r#"={{$parameter["category"] + ": " + $parameter["operation"]}}"#.to_string()),
        description: "Causes problems intentionally".to_string(),
        version: 1,
        defaults: NodeDefaults {
            name: DISPLAY_NAME.to_string(),
        },
        inputs: vec!["main".to_string()],
        outputs: vec!["main".to_string()],
        properties: properties(),
    }
}

fn properties() -> Vec<NodeProperty> {
    let throw_error = [Category::ThrowError.as_str()];
    let oom = [Category::Oom.as_str()];
    let random_data = [Category::RandomData.as_str()];

    vec![
        NodeProperty::options(
            "Category",
            CATEGORY,
            Category::default().as_str(),
            Category::ALL
                .into_iter()
                .map(|category| {
                    PropertyOption::new(category.display_name(), category.as_str())
                        .with_description(category.summary())
                })
                .collect(),
        ),
        NodeProperty::options(
            "Error Type",
            THROW_ERROR_TYPE,
            ThrowErrorType::default().as_str(),
            ThrowErrorType::ALL
                .into_iter()
                .map(|kind| PropertyOption::new(kind.as_str(), kind.as_str()))
                .collect(),
        )
        .shown_for(CATEGORY, &throw_error),
        NodeProperty::string("Error Message", THROW_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE)
            .with_description("The message to send as part of the error")
            .shown_for(CATEGORY, &throw_error),
        NodeProperty::number(
            "Memory Size to Generate",
            MEMORY_SIZE_VALUE,
            DEFAULT_MEMORY_SIZE_MIB,
        )
        .with_description("The approximate amount of memory to generate. Be generous...")
        .shown_for(CATEGORY, &oom),
        NodeProperty::options(
            "Data Type",
            RANDOM_DATA_TYPE,
            RandomDataType::default().as_str(),
            RandomDataType::ALL
                .into_iter()
                .map(|kind| PropertyOption::new(kind.display_name(), kind.as_str()))
                .collect(),
        )
        .shown_for(CATEGORY, &random_data),
        NodeProperty::string("Seed", RANDOM_DATA_SEED, "")
            .with_description(
                "If set, seed to use for generating the data (same seed will generate the same data)",
            )
            .shown_for(CATEGORY, &random_data),
        NodeProperty::number(
            "Number of Items to Generate",
            RANDOM_DATA_COUNT,
            f64::from(DEFAULT_RANDOM_DATA_COUNT),
        )
        .with_description("The number of random data items to generate into an array")
        .shown_for(CATEGORY, &random_data),
    ]
}
