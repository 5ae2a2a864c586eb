//! Declaration builders for mock functions and placeholder type aliases.

use expo_mocks_ts::{TsKeyword, TsParam, TsStmt, TsType};

use crate::defaults::mock_body;
use crate::schema::Closure;
use crate::types::map_type;

/// Whether a mock is declared as a plain or an `async` function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Sync,
    Async,
}

/// Build an exported mock function for `closure`.
///
/// Async mocks declare `Promise<T>` but return the same literal as the sync
/// form; the promise wrapping is purely a type-level concern.
pub fn build_function(closure: &Closure, kind: FunctionKind) -> TsStmt {
    let returns = map_type(closure.return_type());
    let declared = match kind {
        FunctionKind::Sync => returns.to_ts_type(),
        FunctionKind::Async => TsType::promise(returns.to_ts_type()),
    };

    let params = closure
        .parameters()
        .iter()
        .map(|param| TsParam::new(param.name.as_str(), map_type(&param.typename).to_ts_type()))
        .collect();

    TsStmt::Function {
        name: closure.name.clone(),
        params,
        return_type: Some(declared),
        body: mock_body(&returns),
        is_async: kind == FunctionKind::Async,
        exported: true,
    }
}

/// `export type <name> = any;`
pub fn build_type_alias(name: &str) -> TsStmt {
    TsStmt::TypeAlias {
        name: name.to_string(),
        ty: TsType::Keyword(TsKeyword::Any),
        exported: true,
    }
}
