//! Error types for the printer.

use std::fmt;

use thiserror::Error;

/// Where an identifier appears in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Function,
    Parameter,
    TypeAlias,
    TypeReference,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IdentifierKind::Function => "function",
            IdentifierKind::Parameter => "parameter",
            IdentifierKind::TypeAlias => "type alias",
            IdentifierKind::TypeReference => "type reference",
        };
        f.write_str(label)
    }
}

/// Errors that can occur while formatting a module.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    /// A name in the tree is not a legal TypeScript identifier.
    #[error("invalid {kind} name `{name}`")]
    InvalidIdentifier { kind: IdentifierKind, name: String },

    /// `return` outside of a function body.
    #[error("return statement outside of a function body")]
    ReturnOutsideFunction,
}
