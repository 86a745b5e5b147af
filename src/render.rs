//! Plain-text tables for result sets.

use crate::sqlite::{ResultSet, Value};
use tabled::builder::Builder;
use tabled::settings::{Alignment, Style};

/// Display form of a single value.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => format!("{f:?}"),
        Value::Text(s) => s.clone(),
        Value::Blob(bytes) => {
            let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
            format!("x'{hex}'")
        }
    }
}

/// Render `result` with a leading zero-based row index column.
pub fn render_table(result: &ResultSet) -> String {
    if result.is_empty() {
        return format!(
            "Empty result set\nColumns: [{}]",
            result.columns.join(", ")
        );
    }

    let mut builder = Builder::default();
    builder.push_record(std::iter::once(String::new()).chain(result.columns.iter().cloned()));
    for (index, row) in result.rows.iter().enumerate() {
        builder.push_record(std::iter::once(index.to_string()).chain(row.iter().map(format_value)));
    }

    let mut table = builder.build();
    table.with(Style::blank()).with(Alignment::right());
    table.to_string()
}
