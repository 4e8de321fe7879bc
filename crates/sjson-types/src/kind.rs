use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The recognized categories a scalar value is validated against.
///
/// A kind only drives validation. Values are always stored as the original
/// text, and the kind used to admit a value is not remembered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Integer or decimal, optionally negative.
    Number,
    /// Double-quoted text.
    String,
    /// `true` or `false`.
    Boolean,
    /// Bracket-delimited list.
    Array,
    /// The literal `null`.
    Null,
}

impl ValueKind {
    /// All kinds in legacy code order.
    pub const ALL: [ValueKind; 5] = [
        Self::Number,
        Self::String,
        Self::Boolean,
        Self::Array,
        Self::Null,
    ];

    /// Legacy integer code (`1..=5`).
    pub fn code(self) -> i32 {
        match self {
            Self::Number => 1,
            Self::String => 2,
            Self::Boolean => 3,
            Self::Array => 4,
            Self::Null => 5,
        }
    }

    /// Look up a kind by legacy integer code.
    pub fn from_code(code: i32) -> Result<Self, TypeError> {
        match code {
            1 => Ok(Self::Number),
            2 => Ok(Self::String),
            3 => Ok(Self::Boolean),
            4 => Ok(Self::Array),
            5 => Ok(Self::Null),
            other => Err(TypeError::UnsupportedKindCode(other)),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" | "num" => Ok(Self::Number),
            "string" | "str" => Ok(Self::String),
            "boolean" | "bool" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "null" => Ok(Self::Null),
            _ => Err(TypeError::UnknownKind(s.to_string())),
        }
    }
}

impl TryFrom<i32> for ValueKind {
    type Error = TypeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
