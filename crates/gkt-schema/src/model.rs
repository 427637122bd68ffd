//! # Descriptor Data Model
//!
//! The typed tree a codegen descriptor deserializes into once it has passed
//! the JSON Schema check. One YAML file is one [`Source`]; templates receive
//! these serialized, so field names here are the names templates use
//! (`type`, `elems`, `includes`, ...).

use serde::{Deserialize, Serialize, Serializer};

/// A scalar default value for a [`Field`].
///
/// Untagged both ways, so templates see the raw YAML value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// One member of a generated struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    /// Target-language type, copied verbatim (`glm::vec3`, `uint32_t`, ...).
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    #[serde(default)]
    pub default: Option<Scalar>,
}

/// One enumerator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumElement {
    pub name: String,
    pub value: i64,
    /// Empty when the descriptor has none.
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Enum {
    pub name: String,
    pub elems: Vec<EnumElement>,
}

/// A generated struct or class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Type {
    pub name: String,
    pub fields: Vec<Field>,
    /// Empty when the descriptor has none.
    #[serde(default)]
    pub comment: String,
}

/// One validated descriptor file.
///
/// `types` and `enums` may be absent from the YAML; templates always see a
/// sequence, so `{{#each enums}}` works on a types-only descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Source {
    pub name: String,
    pub includes: Vec<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default, serialize_with = "none_as_empty")]
    pub types: Option<Vec<Type>>,
    #[serde(default, serialize_with = "none_as_empty")]
    pub enums: Option<Vec<Enum>>,
}

fn none_as_empty<S, T>(value: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    value.as_deref().unwrap_or(&[]).serialize(serializer)
}
