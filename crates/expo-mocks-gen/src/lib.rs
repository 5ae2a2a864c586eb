//! Mock generation engine for native modules.
//!
//! Walks the exported shape of each native module and emits a TypeScript file
//! of typed placeholder functions returning trivial default values:
//!
//! - [`schema`]: module definitions as produced by the schema exporter.
//! - [`types`]: foreign type names to [`MappedType`] and TypeScript types.
//! - [`defaults`]: default literal for each mapped type.
//! - [`builder`]: function and type-alias declarations.
//! - [`scanner`]: discovery of opaque type names referenced by a module.
//! - [`emitter`]: module assembly, formatting and file output.

pub mod builder;
pub mod defaults;
pub mod emitter;
mod error;
pub mod scanner;
pub mod schema;
pub mod types;

pub use builder::{build_function, build_type_alias, FunctionKind};
pub use defaults::{default_value, mock_body};
pub use emitter::{
    build_module, render_module, CheckStatus, MockGenerator, DEFAULT_EXTENSION,
    DEFAULT_OUTPUT_DIR,
};
pub use error::GenerateError;
pub use scanner::collect_opaque_type_names;
pub use schema::{load_modules, parse_modules, Closure, ClosureTypes, ModuleDefinition, Parameter};
pub use types::{map_type, unwrap_arrays, MappedType};
