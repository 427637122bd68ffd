//! # Case Conversion
//!
//! YAML descriptors name things in snake_case; generated C++ wants
//! `UpperCamelCase` type names and `lowerCamelCase` members.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// `mesh_desc` → `MeshDesc`.
pub fn snake_to_camel_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// `use_mipmap` → `useMipmap`.
pub fn snake_to_lower_camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}
