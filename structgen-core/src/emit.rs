//! Declaration rendering.
//!
//! Consumes normalized column descriptors and produces the fixed-shape
//! declaration block: one opening line, one member line per column, one
//! closing line.

use crate::error::{Result, StructgenError};
use crate::models::ColumnDescriptor;
use crate::naming::to_pascal_case;
use crate::typemap::map_type;
use std::io::Write;

/// Removes each configured handler substring from the table name.
///
/// Handlers apply in listed order and each removes only the first
/// occurrence of its substring, so `t_sys_user` with handlers
/// `["t_", "sys_"]` reduces to `user`.
pub fn strip_table_prefixes(table: &str, handlers: &[String]) -> String {
    let mut name = table.to_string();
    for handler in handlers {
        if handler.is_empty() {
            continue;
        }
        if let Some(idx) = name.find(handler.as_str()) {
            name.replace_range(idx..idx + handler.len(), "");
        }
    }
    name
}

/// Renders the struct declaration for one table.
///
/// The type name is the stripped table name in PascalCase. Members appear
/// in the order the descriptors were received, each carrying the PascalCase
/// field name, the mapped type, a `json` tag with the original column name,
/// and the reported comment trailing the line. Names are emitted as-is
/// after case conversion, with no identifier validation.
pub fn render_struct(table: &str, columns: &[ColumnDescriptor], handlers: &[String]) -> String {
    let type_name = to_pascal_case(&strip_table_prefixes(table, handlers));

    let mut out = format!("type {} struct {{\n", type_name);
    for column in columns {
        out.push_str(&format!(
            "\t{} {} `json:\"{}\"` //{}\n",
            to_pascal_case(&column.name),
            map_type(&column.raw_type),
            column.name,
            column.comment
        ));
    }
    out.push_str("}\n");
    out
}

/// Renders the declaration and streams it to `out`.
///
/// Rendering happens before the first write, so a failing writer never
/// receives a partial declaration followed by more members.
///
/// # Errors
/// Returns an I/O error if the writer rejects the rendered text.
pub fn emit<W: Write>(
    out: &mut W,
    table: &str,
    columns: &[ColumnDescriptor],
    handlers: &[String],
) -> Result<()> {
    let rendered = render_struct(table, columns, handlers);
    out.write_all(rendered.as_bytes())
        .map_err(|e| StructgenError::Io {
            context: "failed to write declaration".to_string(),
            source: e,
        })
}
