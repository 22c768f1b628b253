//! Declared-type vocabulary of parsed documents.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type declared for a variable in a parsed document.
///
/// The parser hands over the raw type token; only the three primitives are
/// recognized, anything else is kept verbatim in [`DeclaredType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Boolean,
    Number,
    String,
    Other(String),
}

impl DeclaredType {
    /// Get the type token as written in the source document.
    pub fn as_str(&self) -> &str {
        match self {
            DeclaredType::Boolean => "boolean",
            DeclaredType::Number => "number",
            DeclaredType::String => "string",
            DeclaredType::Other(raw) => raw,
        }
    }

    /// Whether this is one of the recognized primitives.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, DeclaredType::Other(_))
    }
}

impl FromStr for DeclaredType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "boolean" => DeclaredType::Boolean,
            "number" => DeclaredType::Number,
            "string" => DeclaredType::String,
            other => DeclaredType::Other(other.to_string()),
        })
    }
}

impl From<&str> for DeclaredType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(ty) => ty,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DeclaredType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeclaredType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DeclaredType::from(raw.as_str()))
    }
}
