//! Default literal values returned by generated mocks.

use expo_mocks_ts::{TsExpr, TsStmt};

use crate::types::MappedType;

/// The literal a mock returns for `ty`, or `None` when the mock returns nothing.
///
/// Opaque named types return `null`: every opaque name in a module is aliased
/// to `any` in the same file, so `null` always satisfies the declared type.
pub fn default_value(ty: &MappedType) -> Option<TsExpr> {
    match ty {
        MappedType::Any => Some(TsExpr::Null),
        MappedType::String => Some(TsExpr::String(String::new())),
        MappedType::Boolean => Some(TsExpr::Bool(false)),
        MappedType::Number => Some(TsExpr::Number(0)),
        MappedType::Void => None,
        MappedType::Array(_) => Some(TsExpr::Array(Vec::new())),
        MappedType::Named(_) => Some(TsExpr::Null),
    }
}

/// Body statements of a mock returning `ty`.
pub fn mock_body(ty: &MappedType) -> Vec<TsStmt> {
    default_value(ty)
        .map(|value| vec![TsStmt::Return(Some(value))])
        .unwrap_or_default()
}
