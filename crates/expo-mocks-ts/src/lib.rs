//! Minimal TypeScript AST and pretty-printer for generated mocks.
//!
//! This crate currently defines:
//! - A small TypeScript AST (types, expressions, declarations, modules).
//! - Identifier validation so that malformed trees are rejected before printing.
//! - A formatter that renders the AST to deterministic, prettier-style source.

pub use config::{FormatConfig, QuoteStyle};
pub use error::{FormatError, IdentifierKind};
pub use printer::format_module;

mod config;
mod error;
mod ident;
mod printer;

pub use ident::is_valid_identifier;

/// A TypeScript module consisting of a list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TsModule {
    pub body: Vec<TsStmt>,
}

impl TsModule {
    pub fn new(body: Vec<TsStmt>) -> Self {
        Self { body }
    }

    /// Render the module to a TypeScript source string.
    pub fn to_source(&self, config: &FormatConfig) -> Result<String, FormatError> {
        format_module(self, config)
    }
}

/// Built-in keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsKeyword {
    Any,
    String,
    Boolean,
    Number,
    Void,
}

impl TsKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            TsKeyword::Any => "any",
            TsKeyword::String => "string",
            TsKeyword::Boolean => "boolean",
            TsKeyword::Number => "number",
            TsKeyword::Void => "void",
        }
    }
}

/// TypeScript type nodes (subset).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsType {
    /// `any`, `string`, `boolean`, `number` or `void`.
    Keyword(TsKeyword),
    /// `T[]`
    Array(Box<TsType>),
    /// `Name` or `Name<A, B>`.
    Reference { name: String, type_args: Vec<TsType> },
}

impl TsType {
    /// `T[]`
    pub fn array(element: TsType) -> Self {
        TsType::Array(Box::new(element))
    }

    /// A bare type reference without type arguments.
    pub fn reference(name: impl Into<String>) -> Self {
        TsType::Reference {
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    /// `Promise<T>`
    pub fn promise(inner: TsType) -> Self {
        TsType::Reference {
            name: "Promise".to_string(),
            type_args: vec![inner],
        }
    }
}

/// A typed function parameter: `name: T`.
#[derive(Debug, Clone, PartialEq)]
pub struct TsParam {
    pub name: String,
    pub ty: TsType,
}

impl TsParam {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// TypeScript statements (subset).
#[derive(Debug, Clone, PartialEq)]
pub enum TsStmt {
    /// `export type Name = T;`
    TypeAlias {
        name: String,
        ty: TsType,
        exported: bool,
    },
    /// `export async function name(params): R { body }`
    Function {
        name: String,
        params: Vec<TsParam>,
        return_type: Option<TsType>,
        body: Vec<TsStmt>,
        is_async: bool,
        exported: bool,
    },
    /// `return expr;` or a bare `return;`
    Return(Option<TsExpr>),
}

/// TypeScript expressions (literals only).
#[derive(Debug, Clone, PartialEq)]
pub enum TsExpr {
    Null,
    Bool(bool),
    Number(i64),
    String(String),
    /// Array literal: `[a, b]`.
    Array(Vec<TsExpr>),
}
