use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A record that knows its own table columns.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_value(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a list with fixed columns in table mode, as JSON otherwise.
pub fn render_rows<T: Serialize + Tabular>(
    items: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&items, format);
    }
    if items.is_empty() {
        return Ok(String::from("(no rows)"));
    }
    let rows = items.iter().map(Tabular::row).collect::<Vec<_>>();
    Ok(table::render_table(T::HEADERS, &rows, ui::prefs().term_width))
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

pub fn output_rows<T: Serialize + Tabular>(items: &[T], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_rows(items, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_key_value<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let width = ui::prefs().term_width;
    match serde_json::to_value(value)? {
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, width))
        }
        other => Ok(table::render_table(&["value"], &[vec![value_to_cell(&other)]], width)),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
