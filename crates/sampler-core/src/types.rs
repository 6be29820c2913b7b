//! Semantic attribute types and requirement levels.
//!
//! `SemanticType` is the closed set of primitive kinds the synthesizer knows
//! how to produce, plus a marker for nested objects. Schema files name types
//! with or without the `_t` suffix used by event taxonomies:
//!
//! ```yaml
//! type: string
//! type: ip_t
//! type: object
//! ```
//!
//! Any name outside the set deserializes to [`SemanticType::Unknown`] so newer
//! schema files keep loading.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SemanticType {
    /// Free text (or identifier, depending on the attribute name)
    String,
    /// Milliseconds since the Unix epoch
    Timestamp,
    /// IPv4 address
    Ip,
    /// Subnet, rendered as an IPv4 address
    Subnet,
    /// Explicit IPv4 address
    Ipv4,
    /// IPv6 address
    Ipv6,
    /// MAC address
    Mac,
    /// Directory path
    Directory,
    /// File path with extension
    File,
    /// Email address
    Email,
    /// Network port
    Port,
    /// 64-bit integer
    Long,
    /// Small integer, or enumerated integer when the field has an enum
    Integer,
    /// Boolean
    Boolean,
    /// Floating point
    Float,
    /// Nested object, resolved through `object_type`
    Object,
    /// Type name not known to this crate
    Unknown(String),
}

impl SemanticType {
    /// Canonical (suffix-less) name of the type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Timestamp => "timestamp",
            Self::Ip => "ip",
            Self::Subnet => "subnet",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Mac => "mac",
            Self::Directory => "directory",
            Self::File => "file",
            Self::Email => "email",
            Self::Port => "port",
            Self::Long => "long",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Object => "object",
            Self::Unknown(name) => name,
        }
    }

    /// Whether this type marks a nested object.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object)
    }
}

impl From<&str> for SemanticType {
    fn from(name: &str) -> Self {
        let base = name.strip_suffix("_t").unwrap_or(name);
        match base {
            "string" => Self::String,
            "timestamp" => Self::Timestamp,
            "ip" => Self::Ip,
            "subnet" => Self::Subnet,
            "ipv4" => Self::Ipv4,
            "ipv6" => Self::Ipv6,
            "mac" => Self::Mac,
            "directory" => Self::Directory,
            "file" => Self::File,
            "email" => Self::Email,
            "port" => Self::Port,
            "long" => Self::Long,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "float" => Self::Float,
            "object" => Self::Object,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

impl From<String> for SemanticType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<SemanticType> for String {
    fn from(value: SemanticType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement level of an attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Always populated
    Required,
    /// Populated with the optional inclusion probability
    #[default]
    Optional,
    /// Treated like `Optional` by the generator
    Recommended,
}

impl Requirement {
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}
