//! Mapping from foreign (Swift-style) type names to TypeScript types.

use std::fmt;

use expo_mocks_ts::{TsKeyword, TsType};

/// Classification of a foreign type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MappedType {
    Any,
    String,
    Boolean,
    Number,
    Void,
    Array(Box<MappedType>),
    /// A type with no known primitive shape, emitted as a placeholder alias.
    Named(String),
}

/// Map a foreign type name.
///
/// Never fails: anything that is not empty, bracketed or a known primitive
/// becomes [`MappedType::Named`] with the name kept verbatim.
pub fn map_type(type_name: &str) -> MappedType {
    let (depth, element) = unwrap_arrays(type_name);
    let mut mapped = map_element(element);
    for _ in 0..depth {
        mapped = MappedType::Array(Box::new(mapped));
    }
    mapped
}

/// Strip every level of `[...]` wrapping, returning the nesting depth and the element name.
pub fn unwrap_arrays(type_name: &str) -> (usize, &str) {
    let mut depth = 0;
    let mut current = type_name;
    while let Some(inner) = current
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        depth += 1;
        current = inner;
    }
    (depth, current)
}

fn map_element(name: &str) -> MappedType {
    match name {
        "" => MappedType::Void,
        "unknown" => MappedType::Any,
        "String" => MappedType::String,
        "Bool" => MappedType::Boolean,
        "Int" | "Float" | "Double" => MappedType::Number,
        other => MappedType::Named(other.to_string()),
    }
}

impl MappedType {
    /// The TypeScript type node for this classification.
    pub fn to_ts_type(&self) -> TsType {
        match self {
            MappedType::Any => TsType::Keyword(TsKeyword::Any),
            MappedType::String => TsType::Keyword(TsKeyword::String),
            MappedType::Boolean => TsType::Keyword(TsKeyword::Boolean),
            MappedType::Number => TsType::Keyword(TsKeyword::Number),
            MappedType::Void => TsType::Keyword(TsKeyword::Void),
            MappedType::Array(element) => TsType::array(element.to_ts_type()),
            MappedType::Named(name) => TsType::reference(name.as_str()),
        }
    }

    /// Name of the opaque type, if this is a named reference (not looking through arrays).
    pub fn opaque_name(&self) -> Option<&str> {
        match self {
            MappedType::Named(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Renders the foreign spelling, so `map_type(&ty.to_string()) == ty`.
impl fmt::Display for MappedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappedType::Any => f.write_str("unknown"),
            MappedType::String => f.write_str("String"),
            MappedType::Boolean => f.write_str("Bool"),
            MappedType::Number => f.write_str("Double"),
            MappedType::Void => Ok(()),
            MappedType::Array(element) => write!(f, "[{element}]"),
            MappedType::Named(name) => f.write_str(name),
        }
    }
}
