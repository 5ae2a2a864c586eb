//! Module assembly and mock file output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use expo_mocks_ts::{FormatConfig, FormatError, TsModule};

use crate::builder::{build_function, build_type_alias, FunctionKind};
use crate::scanner::collect_opaque_type_names;
use crate::schema::ModuleDefinition;
use crate::GenerateError;

/// Directory name used by the CLI when no output directory is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "mocks";

/// File extension of generated mocks.
pub const DEFAULT_EXTENSION: &str = "ts";

/// Build the mock module: type aliases, then plain functions, then async functions.
pub fn build_module(module: &ModuleDefinition) -> TsModule {
    let mut body: Vec<_> = collect_opaque_type_names(module)
        .iter()
        .map(|name| build_type_alias(name))
        .collect();
    body.extend(
        module
            .functions
            .iter()
            .map(|closure| build_function(closure, FunctionKind::Sync)),
    );
    body.extend(
        module
            .async_functions
            .iter()
            .map(|closure| build_function(closure, FunctionKind::Async)),
    );
    TsModule::new(body)
}

/// Build and format the mock source for one module.
pub fn render_module(module: &ModuleDefinition, config: &FormatConfig) -> Result<String, FormatError> {
    build_module(module).to_source(config)
}

/// Result of comparing a module's mock on disk with freshly rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Writes one mock file per module into an output directory.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    output_dir: PathBuf,
    format: FormatConfig,
    extension: String,
}

impl MockGenerator {
    /// Create a generator writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: FormatConfig::default(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn format_config(&self) -> &FormatConfig {
        &self.format
    }

    /// `<output_dir>/<ModuleName>.<ext>`
    pub fn output_path(&self, module: &ModuleDefinition) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", module.name, self.extension))
    }

    /// Render the mock source for `module` without touching the file system.
    pub fn render(&self, module: &ModuleDefinition) -> Result<String, GenerateError> {
        check_module_name(&module.name)?;
        tracing::debug!(
            module = %module.name,
            functions = module.functions.len(),
            async_functions = module.async_functions.len(),
            "rendering mock"
        );
        Ok(render_module(module, &self.format)?)
    }

    /// Render `module` and write it, replacing any existing file.
    pub fn generate_module(&self, module: &ModuleDefinition) -> Result<PathBuf, GenerateError> {
        let source = self.render(module)?;

        fs::create_dir_all(&self.output_dir).map_err(|source| GenerateError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_path(module);
        fs::write(&path, source).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(module = %module.name, path = %path.display(), "wrote mock");

        Ok(path)
    }

    /// Generate every module in order, stopping at the first failure.
    ///
    /// Files written before the failure are left in place.
    pub fn generate_all(&self, modules: &[ModuleDefinition]) -> Result<Vec<PathBuf>, GenerateError> {
        modules
            .iter()
            .map(|module| self.generate_module(module))
            .collect()
    }

    /// Compare the file on disk with what [`generate_module`](Self::generate_module) would write.
    pub fn check_module(&self, module: &ModuleDefinition) -> Result<CheckStatus, GenerateError> {
        let expected = self.render(module)?;
        let path = self.output_path(module);
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => Ok(CheckStatus::UpToDate),
            Ok(_) => Ok(CheckStatus::Stale),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(CheckStatus::Missing),
            Err(source) => Err(GenerateError::Read { path, source }),
        }
    }

    pub fn check_all(
        &self,
        modules: &[ModuleDefinition],
    ) -> Result<Vec<(PathBuf, CheckStatus)>, GenerateError> {
        modules
            .iter()
            .map(|module| {
                self.check_module(module)
                    .map(|status| (self.output_path(module), status))
            })
            .collect()
    }
}

/// Module names become file names, so they must be a single plain path component.
fn check_module_name(name: &str) -> Result<(), GenerateError> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0']);
    if valid {
        Ok(())
    } else {
        Err(GenerateError::InvalidModuleName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Closure, Parameter};
    use expo_mocks_ts::{IdentifierKind, TsStmt};

    fn example_module() -> ModuleDefinition {
        ModuleDefinition::new("ExampleModule")
            .with_function(Closure::new("getValue", Vec::new(), Some("Int")))
            .with_async_function(Closure::new(
                "getValueAsync",
                vec![Parameter::new("id", "String")],
                Some("Bool"),
            ))
    }

    #[test]
    fn renders_example_module() {
        let src = render_module(&example_module(), &FormatConfig::default()).unwrap();
        assert_eq!(
            src,
            "export function getValue(): number {\n  return 0;\n}\n\n\
             export async function getValueAsync(id: string): Promise<boolean> {\n  return false;\n}\n"
        );
    }

    #[test]
    fn aliases_come_first_then_sync_then_async() {
        let module = ModuleDefinition::new("Order")
            .with_async_function(Closure::new("later", Vec::new(), Some("Result")))
            .with_function(Closure::new("now", vec![Parameter::new("p", "Input")], None));

        let body = build_module(&module).body;
        let kinds: Vec<&str> = body
            .iter()
            .map(|stmt| match stmt {
                TsStmt::TypeAlias { name, .. } => name.as_str(),
                TsStmt::Function { name, .. } => name.as_str(),
                TsStmt::Return(_) => "return",
            })
            .collect();
        assert_eq!(kinds, vec!["Input", "Result", "now", "later"]);
    }

    #[test]
    fn opaque_types_render_as_any_aliases() {
        let module = ModuleDefinition::new("Geo").with_function(Closure::new(
            "locate",
            vec![Parameter::new("query", "Foo")],
            Some("[Bar]"),
        ));
        let src = render_module(&module, &FormatConfig::default()).unwrap();
        assert_eq!(
            src,
            "export type Foo = any;\nexport type Bar = any;\n\n\
             export function locate(query: Foo): Bar[] {\n  return [];\n}\n"
        );
    }

    #[test]
    fn native_promise_parameter_is_not_aliased() {
        let module = ModuleDefinition::new("Net").with_async_function(Closure::new(
            "fetch",
            vec![
                Parameter::new("url", "String"),
                Parameter::new("promise", "Promise"),
            ],
            Some("String"),
        ));
        let err = render_module(&module, &FormatConfig::default()).unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidIdentifier {
                kind: IdentifierKind::TypeAlias,
                name: "Promise".to_string(),
            }
        );
    }

    #[test]
    fn strict_mode_bindings_are_rejected() {
        for name in ["await", "eval", "arguments"] {
            let module = ModuleDefinition::new("Strict").with_function(Closure::new(
                "f",
                vec![Parameter::new(name, "Int")],
                None,
            ));
            let err = render_module(&module, &FormatConfig::default()).unwrap_err();
            assert_eq!(
                err,
                FormatError::InvalidIdentifier {
                    kind: IdentifierKind::Parameter,
                    name: name.to_string(),
                }
            );
        }
    }

    #[test]
    fn empty_module_renders_empty_file() {
        let src = render_module(&ModuleDefinition::new("Nothing"), &FormatConfig::default()).unwrap();
        assert!(src.is_empty());
    }

    #[test]
    fn output_path_uses_module_name_and_extension() {
        let generator = MockGenerator::new("out/mocks").with_extension("d.ts");
        assert_eq!(
            generator.output_path(&example_module()),
            PathBuf::from("out/mocks/ExampleModule.d.ts")
        );
    }

    #[test]
    fn rejects_module_names_that_are_not_file_names() {
        let generator = MockGenerator::new("mocks");
        for name in ["", "..", "nested/Module", "back\\slash"] {
            let err = generator.render(&ModuleDefinition::new(name)).unwrap_err();
            assert!(
                matches!(err, GenerateError::InvalidModuleName(ref n) if n == name),
                "{name:?}: {err}"
            );
        }
    }
}
