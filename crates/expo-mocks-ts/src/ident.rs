//! TypeScript identifier rules.

use crate::error::{FormatError, IdentifierKind};

/// Words that cannot be used as binding names in strict-mode modules.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Names that strict-mode code cannot bind.
const RESTRICTED_BINDINGS: &[&str] = &["arguments", "eval"];

/// Global types referenced by generated declarations.
const GLOBAL_TYPES: &[&str] = &["Promise"];

/// Predefined type names that a type alias cannot shadow.
const PREDEFINED_TYPES: &[&str] = &[
    "any",
    "bigint",
    "boolean",
    "never",
    "number",
    "object",
    "string",
    "symbol",
    "undefined",
    "unknown",
];

/// Check whether `name` is lexically a valid identifier.
///
/// Reserved words are not considered here.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c == '$' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
}

pub(crate) fn check_identifier(kind: IdentifierKind, name: &str) -> Result<(), FormatError> {
    let valid = match kind {
        IdentifierKind::Function | IdentifierKind::Parameter => {
            is_valid_identifier(name)
                && !RESERVED_WORDS.contains(&name)
                && !RESTRICTED_BINDINGS.contains(&name)
        }
        IdentifierKind::TypeAlias => {
            is_valid_identifier(name)
                && !RESERVED_WORDS.contains(&name)
                && !PREDEFINED_TYPES.contains(&name)
                && !GLOBAL_TYPES.contains(&name)
        }
        // Qualified references (`Namespace.Name`) are allowed.
        IdentifierKind::TypeReference => name
            .split('.')
            .all(|segment| is_valid_identifier(segment) && !RESERVED_WORDS.contains(&segment)),
    };

    if valid {
        Ok(())
    } else {
        Err(FormatError::InvalidIdentifier {
            kind,
            name: name.to_string(),
        })
    }
}
