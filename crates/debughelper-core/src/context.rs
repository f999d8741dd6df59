use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::description::NodeDescription;
use crate::error::{NodeError, Result};
use crate::item::{Item, NodeRef};

/// Services the host exposes to a node while it executes.
pub trait ExecuteContext {
    /// Items arriving on the node's main input.
    fn input_items(&self) -> Vec<Item>;

    /// Raw value of parameter `name` as resolved for item `item_index`.
    fn node_parameter(&self, name: &str, item_index: usize) -> Result<Value>;

    /// Whether failed items become error records instead of aborting the run.
    fn continue_on_fail(&self) -> bool;

    /// The node instance being executed.
    fn node(&self) -> &NodeRef;
}

/// A node type the host can register and run.
pub trait NodeType {
    fn description(&self) -> NodeDescription;

    /// Process every input item and return the items for the main output.
    fn execute(&self, ctx: &dyn ExecuteContext) -> Result<Vec<Item>>;
}

/// Read parameter `name` and decode it into `T`.
pub fn parameter<T: DeserializeOwned>(
    ctx: &dyn ExecuteContext,
    name: &str,
    item_index: usize,
) -> Result<T> {
    let value = ctx.node_parameter(name, item_index)?;
    serde_json::from_value(value).map_err(|err| NodeError::invalid_parameter(name, err.to_string()))
}

/// Parameter values for one node instance, falling back to the defaults
/// declared in the node description.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    values: Map<String, Value>,
    defaults: Map<String, Value>,
}

impl ParameterStore {
    pub fn new(description: &NodeDescription) -> Self {
        Self {
            values: Map::new(),
            defaults: description.defaults_map(),
        }
    }

    /// Set a parameter. Names the description does not declare are rejected.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        if !self.defaults.contains_key(name) {
            return Err(NodeError::invalid_parameter(name, "unknown parameter"));
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Set every entry of a JSON object.
    pub fn extend(&mut self, values: &Map<String, Value>) -> Result<()> {
        for (name, value) in values {
            self.set(name, value.clone())?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Value> {
        self.values
            .get(name)
            .or_else(|| self.defaults.get(name))
            .cloned()
            .ok_or_else(|| NodeError::invalid_parameter(name, "unknown parameter"))
    }
}

/// In-process host used by the CLI harness and tests.
///
/// Parameters carry no per-item expressions, so every item index resolves
/// to the same value.
#[derive(Debug, Clone)]
pub struct LocalContext {
    node: NodeRef,
    items: Vec<Item>,
    parameters: ParameterStore,
    continue_on_fail: bool,
}

impl LocalContext {
    pub fn new(node: NodeRef, items: Vec<Item>, parameters: ParameterStore) -> Self {
        Self {
            node,
            items,
            parameters,
            continue_on_fail: false,
        }
    }

    pub fn with_continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }
}

impl ExecuteContext for LocalContext {
    fn input_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn node_parameter(&self, name: &str, item_index: usize) -> Result<Value> {
        if item_index > 0 && item_index >= self.items.len() {
            return Err(NodeError::invalid_parameter(
                name,
                format!("item index {item_index} out of range"),
            ));
        }
        self.parameters.get(name)
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }

    fn node(&self) -> &NodeRef {
        &self.node
    }
}
