use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;

/// Kind of fixture record to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RandomDataType {
    /// `{uid, email, firstname, lastname, password}`
    #[default]
    User,
    /// `{email, confirmed}`
    Email,
    /// Postal address with holder name.
    Address,
    /// `{type, number, ccv, exp, holder_name}`
    CreditCard,
    /// Bare UUID v4 string.
    Uuid,
    /// Ten character URL-safe identifier.
    Nanoid,
}

impl RandomDataType {
    pub const ALL: [RandomDataType; 6] = [
        RandomDataType::User,
        RandomDataType::Email,
        RandomDataType::Address,
        RandomDataType::CreditCard,
        RandomDataType::Uuid,
        RandomDataType::Nanoid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Email => "email",
            Self::Address => "address",
            Self::CreditCard => "creditCard",
            Self::Uuid => "uuid",
            Self::Nanoid => "nanoid",
        }
    }

    /// Label shown in the node editor.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::User => "User Data",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::CreditCard => "Credit Card",
            Self::Uuid => "UUIDs",
            Self::Nanoid => "NanoIds",
        }
    }
}

impl fmt::Display for RandomDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RandomDataType {
    type Err = GenerateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| GenerateError::UnknownType(value.to_string()))
    }
}
