//! Discovery of opaque type names referenced by a module.

use indexmap::IndexSet;

use crate::schema::{Closure, ModuleDefinition};
use crate::types::{map_type, unwrap_arrays, MappedType};

/// Collect every opaque type name used by the module's plain and async functions.
///
/// Array wrapping is looked through, primitives are skipped and duplicates are
/// dropped. Names are kept in first-seen order: plain functions before async
/// functions, and within a closure its parameters before its return type.
pub fn collect_opaque_type_names(module: &ModuleDefinition) -> IndexSet<String> {
    let mut names = IndexSet::new();
    for closure in module.functions.iter().chain(&module.async_functions) {
        for type_name in referenced_type_names(closure) {
            let (_, element) = unwrap_arrays(type_name);
            if let MappedType::Named(name) = map_type(element) {
                names.insert(name);
            }
        }
    }
    names
}

fn referenced_type_names(closure: &Closure) -> impl Iterator<Item = &str> {
    closure
        .parameters()
        .iter()
        .map(|param| param.typename.as_str())
        .chain(std::iter::once(closure.return_type()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Parameter;

    fn names(module: &ModuleDefinition) -> Vec<String> {
        collect_opaque_type_names(module).into_iter().collect()
    }

    #[test]
    fn finds_parameter_and_array_return_types() {
        let module = ModuleDefinition::new("Geo").with_function(Closure::new(
            "project",
            vec![Parameter::new("input", "Foo")],
            Some("[Bar]"),
        ));
        assert_eq!(names(&module), vec!["Foo", "Bar"]);
    }

    #[test]
    fn deduplicates_across_closures() {
        let module = ModuleDefinition::new("Geo")
            .with_function(Closure::new("a", vec![Parameter::new("x", "Foo")], Some("Foo")))
            .with_async_function(Closure::new(
                "b",
                vec![Parameter::new("xs", "[[Foo]]")],
                Some("Baz"),
            ));
        assert_eq!(names(&module), vec!["Foo", "Baz"]);
    }

    #[test]
    fn skips_primitives_and_void() {
        let module = ModuleDefinition::new("Prims").with_function(Closure::new(
            "f",
            vec![
                Parameter::new("a", "unknown"),
                Parameter::new("b", "[String]"),
                Parameter::new("c", "Bool"),
                Parameter::new("d", "[[Double]]"),
            ],
            None,
        ));
        assert!(collect_opaque_type_names(&module).is_empty());
    }

    #[test]
    fn ignores_sync_functions() {
        let module = ModuleDefinition::new("Clock").with_sync_function(Closure::new(
            "now",
            Vec::new(),
            Some("Instant"),
        ));
        assert!(collect_opaque_type_names(&module).is_empty());
    }
}
