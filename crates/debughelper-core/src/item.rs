use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Link from an output item back to the input item it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// One record flowing through a workflow execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Payload of the record.
    #[serde(default)]
    pub json: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paired_item: Option<PairedItem>,
    /// Error message, only set on records produced under continue-on-fail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_index: Option<usize>,
}

impl Item {
    /// Input record at position `index`, paired with itself.
    pub fn input(index: usize, json: Map<String, Value>) -> Self {
        Self {
            json,
            paired_item: Some(PairedItem { item: index }),
            ..Self::default()
        }
    }

    /// Record emitted in place of an item whose processing failed.
    pub fn failed(index: usize, message: impl Into<String>) -> Self {
        Self {
            json: Map::new(),
            paired_item: None,
            error: Some(message.into()),
            item_index: Some(index),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Identity of the node instance that raised an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

impl NodeRef {
    pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: node_type.into(),
        }
    }
}
