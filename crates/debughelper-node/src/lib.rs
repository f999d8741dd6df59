//! The DebugHelper node.
//!
//! A workflow node that causes problems on purpose: it throws one of the
//! host's error shapes, allocates memory until a requested size, or
//! replaces items with generated fixture data.

pub mod description;
pub mod memory;
pub mod model;
pub mod node;
pub mod schema;

pub use description::{DISPLAY_NAME, NODE_NAME, node_description};
pub use memory::{MemoryReport, generate_garbage_memory};
pub use model::{Category, DebugHelperParameters, ThrowErrorType};
pub use node::{DebugHelper, GENERATED_ITEMS_KEY};
pub use schema::parameters_json_schema;
