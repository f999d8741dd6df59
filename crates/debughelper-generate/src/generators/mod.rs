//! Fixture record generators, one per [`RandomDataType`].

mod finance;
mod identifiers;
mod person;

use rand::Rng;
use serde_json::Value;

use crate::model::RandomDataType;

pub use finance::credit_card;
pub use identifiers::{NANOID_LEN, nanoid, uuid_v4};
pub use person::{address, email, user};

/// Generate one value of the given kind.
pub fn generate_value<R: Rng>(kind: RandomDataType, rng: &mut R) -> Value {
    match kind {
        RandomDataType::User => user(rng),
        RandomDataType::Email => email(rng),
        RandomDataType::Address => address(rng),
        RandomDataType::CreditCard => credit_card(rng),
        RandomDataType::Uuid => Value::String(uuid_v4(rng)),
        RandomDataType::Nanoid => Value::String(nanoid(rng)),
    }
}

/// Generate `count` values of the given kind as a JSON array.
pub fn generate_many<R: Rng>(kind: RandomDataType, count: usize, rng: &mut R) -> Value {
    tracing::debug!(event = "generate_many", kind = %kind, count = count);
    Value::Array((0..count).map(|_| generate_value(kind, rng)).collect())
}
