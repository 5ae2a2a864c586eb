//! Pretty-printer that renders the TypeScript AST to source text.

use crate::config::FormatConfig;
use crate::error::{FormatError, IdentifierKind};
use crate::ident::check_identifier;
use crate::{TsExpr, TsModule, TsParam, TsStmt, TsType};

/// Validate a module and render it to formatted TypeScript.
///
/// The whole tree is validated before printing starts, so an error never
/// produces partial output.
pub fn format_module(module: &TsModule, config: &FormatConfig) -> Result<String, FormatError> {
    validate_stmts(&module.body, false)?;
    Ok(Printer::new(config).format_module(module))
}

fn validate_stmts(stmts: &[TsStmt], in_function: bool) -> Result<(), FormatError> {
    for stmt in stmts {
        match stmt {
            TsStmt::TypeAlias { name, ty, .. } => {
                check_identifier(IdentifierKind::TypeAlias, name)?;
                validate_type(ty)?;
            }
            TsStmt::Function {
                name,
                params,
                return_type,
                body,
                ..
            } => {
                check_identifier(IdentifierKind::Function, name)?;
                for param in params {
                    check_identifier(IdentifierKind::Parameter, &param.name)?;
                    validate_type(&param.ty)?;
                }
                if let Some(ty) = return_type {
                    validate_type(ty)?;
                }
                validate_stmts(body, true)?;
            }
            TsStmt::Return(_) if !in_function => return Err(FormatError::ReturnOutsideFunction),
            TsStmt::Return(_) => {}
        }
    }
    Ok(())
}

fn validate_type(ty: &TsType) -> Result<(), FormatError> {
    match ty {
        TsType::Keyword(_) => Ok(()),
        TsType::Array(element) => validate_type(element),
        TsType::Reference { name, type_args } => {
            check_identifier(IdentifierKind::TypeReference, name)?;
            type_args.iter().try_for_each(validate_type)
        }
    }
}

/// Printer state that walks the AST and produces formatted output.
struct Printer<'a> {
    config: &'a FormatConfig,
    indent: usize,
    output: String,
    /// Track if we're at the start of a line (for indent handling)
    at_line_start: bool,
}

impl<'a> Printer<'a> {
    fn new(config: &'a FormatConfig) -> Self {
        Self {
            config,
            indent: 0,
            output: String::new(),
            at_line_start: true,
        }
    }

    fn format_module(mut self, module: &TsModule) -> String {
        self.format_stmts(&module.body);

        // Ensure file ends with newline
        if !self.output.is_empty() && !self.output.ends_with('\n') {
            self.newline();
        }

        self.output
    }

    fn format_stmts(&mut self, stmts: &[TsStmt]) {
        for (i, stmt) in stmts.iter().enumerate() {
            if i > 0 && needs_blank_line(&stmts[i - 1], stmt) {
                self.newline();
            }
            self.format_stmt(stmt);
        }
    }

    fn format_stmt(&mut self, stmt: &TsStmt) {
        match stmt {
            TsStmt::TypeAlias { name, ty, exported } => {
                self.write_indent();
                if *exported {
                    self.write("export ");
                }
                self.write("type ");
                self.write(name);
                self.write(" = ");
                self.write(&type_to_string(ty));
                self.write(";");
                self.newline();
            }
            TsStmt::Function {
                name,
                params,
                return_type,
                body,
                is_async,
                exported,
            } => self.format_function(
                name,
                params,
                return_type.as_ref(),
                body,
                *is_async,
                *exported,
            ),
            TsStmt::Return(value) => {
                self.write_indent();
                self.write("return");
                if let Some(expr) = value {
                    self.write(" ");
                    let mut out = String::new();
                    write_expr(expr, self.config, &mut out);
                    self.write(&out);
                }
                self.write(";");
                self.newline();
            }
        }
    }

    fn format_function(
        &mut self,
        name: &str,
        params: &[TsParam],
        return_type: Option<&TsType>,
        body: &[TsStmt],
        is_async: bool,
        exported: bool,
    ) {
        let mut head = String::new();
        if exported {
            head.push_str("export ");
        }
        if is_async {
            head.push_str("async ");
        }
        head.push_str("function ");
        head.push_str(name);

        let rendered_params: Vec<String> = params
            .iter()
            .map(|p| format!("{}: {}", p.name, type_to_string(&p.ty)))
            .collect();
        let ret = return_type
            .map(|ty| format!(": {}", type_to_string(ty)))
            .unwrap_or_default();
        let open = if body.is_empty() { " {}" } else { " {" };

        let inline_params = rendered_params.join(", ");
        let width = self.config.indent_width(self.indent)
            + head.chars().count()
            + inline_params.chars().count()
            + ret.chars().count()
            + open.len()
            + 2;

        self.write_indent();
        self.write(&head);
        if rendered_params.is_empty() || width <= self.config.max_line_length {
            self.write("(");
            self.write(&inline_params);
            self.write(")");
        } else {
            // One parameter per line with a trailing comma.
            self.write("(");
            self.newline();
            self.indent += 1;
            for param in &rendered_params {
                self.write_indent();
                self.write(param);
                self.write(",");
                self.newline();
            }
            self.indent -= 1;
            self.write_indent();
            self.write(")");
        }
        self.write(&ret);
        self.write(open);
        self.newline();

        if !body.is_empty() {
            self.indent += 1;
            self.format_stmts(body);
            self.indent -= 1;
            self.write_indent();
            self.write("}");
            self.newline();
        }
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
        self.at_line_start = false;
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent_str = self.config.indent_str();
            for _ in 0..self.indent {
                self.output.push_str(&indent_str);
            }
        }
        self.at_line_start = false;
    }

    fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }
}

/// Consecutive type aliases stay grouped; functions are separated by a blank line.
fn needs_blank_line(prev: &TsStmt, next: &TsStmt) -> bool {
    matches!(prev, TsStmt::Function { .. }) || matches!(next, TsStmt::Function { .. })
}

fn type_to_string(ty: &TsType) -> String {
    let mut out = String::new();
    write_type(ty, &mut out);
    out
}

fn write_type(ty: &TsType, out: &mut String) {
    match ty {
        TsType::Keyword(keyword) => out.push_str(keyword.as_str()),
        TsType::Array(element) => {
            write_type(element, out);
            out.push_str("[]");
        }
        TsType::Reference { name, type_args } => {
            out.push_str(name);
            if !type_args.is_empty() {
                out.push('<');
                for (i, arg) in type_args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_type(arg, out);
                }
                out.push('>');
            }
        }
    }
}

fn write_expr(expr: &TsExpr, config: &FormatConfig, out: &mut String) {
    match expr {
        TsExpr::Null => out.push_str("null"),
        TsExpr::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        TsExpr::Number(n) => out.push_str(&n.to_string()),
        TsExpr::String(s) => write_string_literal(s, config.quote_style.quote_char(), out),
        TsExpr::Array(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(element, config, out);
            }
            out.push(']');
        }
    }
}

fn write_string_literal(value: &str, quote: char, out: &mut String) {
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
}
