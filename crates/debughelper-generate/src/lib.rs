//! Synthetic fixture data for the DebugHelper node.
//!
//! Six record shapes (users, emails, addresses, credit cards, UUIDs and
//! short identifiers) generated from a caller-supplied RNG. Seeded RNGs make
//! the output reproducible.

pub mod errors;
pub mod generators;
pub mod model;
pub mod seed;

pub use errors::GenerateError;
pub use generators::{generate_many, generate_value};
pub use model::RandomDataType;
pub use seed::rng_from_seed;
