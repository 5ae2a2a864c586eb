//! Module definitions as exported from native module sources.
//!
//! The exporter writes JSON with camelCase keys:
//!
//! ```json
//! {
//!   "name": "ExampleModule",
//!   "functions": [
//!     { "name": "getValue", "types": { "parameters": [], "returnType": "Int" } }
//!   ],
//!   "asyncFunctions": [
//!     {
//!       "name": "getValueAsync",
//!       "types": {
//!         "parameters": [{ "name": "id", "typename": "String" }],
//!         "returnType": "Bool"
//!       }
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::GenerateError;

/// The public callable surface of one native module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<Closure>,
    #[serde(default)]
    pub async_functions: Vec<Closure>,
    /// Carried for completeness; sync functions are not mocked.
    #[serde(default)]
    pub sync_functions: Vec<Closure>,
}

impl ModuleDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_function(mut self, closure: Closure) -> Self {
        self.functions.push(closure);
        self
    }

    pub fn with_async_function(mut self, closure: Closure) -> Self {
        self.async_functions.push(closure);
        self
    }

    pub fn with_sync_function(mut self, closure: Closure) -> Self {
        self.sync_functions.push(closure);
        self
    }
}

/// A single function signature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Closure {
    pub name: String,
    /// `null` or missing when the exporter could not resolve a signature.
    #[serde(default)]
    pub types: Option<ClosureTypes>,
}

impl Closure {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, return_type: Option<&str>) -> Self {
        Self {
            name: name.into(),
            types: Some(ClosureTypes {
                parameters,
                return_type: return_type.map(str::to_string),
            }),
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        self.types
            .as_ref()
            .map(|types| types.parameters.as_slice())
            .unwrap_or_default()
    }

    /// The foreign return type name; empty when the closure returns nothing.
    pub fn return_type(&self) -> &str {
        self.types
            .as_ref()
            .and_then(|types| types.return_type.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureTypes {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub typename: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, typename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            typename: typename.into(),
        }
    }
}

/// Parse module definitions from JSON.
///
/// Accepts either an array of modules or a single module object.
pub fn parse_modules(source: &str) -> Result<Vec<ModuleDefinition>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|module| vec![module])
    }
}

/// Read and parse a schema file.
pub fn load_modules(path: &Path) -> Result<Vec<ModuleDefinition>, GenerateError> {
    let source = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_modules(&source).map_err(|source| GenerateError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_module_array() {
        let json = r#"[
            {
                "name": "ExampleModule",
                "functions": [
                    { "name": "getValue", "types": { "parameters": [], "returnType": "Int" } }
                ],
                "asyncFunctions": [
                    {
                        "name": "getValueAsync",
                        "types": {
                            "parameters": [{ "name": "id", "typename": "String" }],
                            "returnType": "Bool"
                        }
                    }
                ]
            },
            { "name": "EmptyModule" }
        ]"#;

        let modules = parse_modules(json).unwrap();
        assert_eq!(modules.len(), 2);

        let example = &modules[0];
        assert_eq!(example.name, "ExampleModule");
        assert_eq!(example.functions[0].return_type(), "Int");
        assert_eq!(
            example.async_functions[0].parameters(),
            &[Parameter::new("id", "String")]
        );
        assert!(example.sync_functions.is_empty());

        assert_eq!(modules[1], ModuleDefinition::new("EmptyModule"));
    }

    #[test]
    fn parses_single_module_object() {
        let json = r#"{ "name": "Solo", "syncFunctions": [{ "name": "now", "types": null }] }"#;
        let modules = parse_modules(json).unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].sync_functions[0].name, "now");
    }

    #[test]
    fn missing_types_mean_no_params_and_void() {
        let closure: Closure = serde_json::from_str(r#"{ "name": "ping" }"#).unwrap();
        assert!(closure.parameters().is_empty());
        assert_eq!(closure.return_type(), "");

        let closure: Closure =
            serde_json::from_str(r#"{ "name": "ping", "types": { "returnType": null } }"#).unwrap();
        assert_eq!(closure.return_type(), "");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_modules("{ not json").is_err());
        assert!(parse_modules(r#"[{ "functions": [] }]"#).is_err());
    }

    #[test]
    fn builder_helpers() {
        let module = ModuleDefinition::new("Clock")
            .with_function(Closure::new("tick", Vec::new(), None))
            .with_async_function(Closure::new("sync", Vec::new(), Some("Bool")))
            .with_sync_function(Closure::new("now", Vec::new(), Some("Double")));
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.async_functions[0].return_type(), "Bool");
        assert_eq!(module.sync_functions[0].return_type(), "Double");
    }
}
