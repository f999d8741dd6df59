//! Host contract for the DebugHelper node.
//!
//! This crate models the boundary between a workflow host and a node:
//! execution items, the declarative node description, the execution
//! context a host provides, the host's error shapes, and parameter
//! validation.

pub mod context;
pub mod description;
pub mod error;
pub mod item;
pub mod validation;

pub use context::{ExecuteContext, LocalContext, NodeType, ParameterStore, parameter};
pub use description::{
    DisplayOptions, NodeDefaults, NodeDescription, NodeProperty, PropertyOption, PropertyType,
};
pub use error::{NodeError, Result};
pub use item::{Item, NodeRef, PairedItem};
pub use validation::{
    IssueSeverity, ValidationIssue, ValidationReport, json_schema_for, validate_description,
    validate_parameters,
};
