use crate::domain::view::column::{CellFormat, Column};
use crate::domain::view::value::{FieldValue, SortDirection};

pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{sign}R$ {},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn cell_text<T>(column: &Column<T>, record: &T) -> String {
    match (column.format, column.value(record)) {
        (_, FieldValue::Null) => "—".to_string(),
        (CellFormat::Currency, FieldValue::Number(number)) => format_currency(number),
        (_, value) => value.plain(),
    }
}

pub fn column_alignment<T>(column: &Column<T>) -> &'static str {
    match column.format {
        CellFormat::Currency => "right",
        CellFormat::Plain => "left",
    }
}

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

pub fn root_container_style() -> &'static str {
    "font-family: 'Noto Sans', sans-serif; padding: 12px; background: #fff; height: 100vh; display: flex; flex-direction: column; overflow: hidden; box-sizing: border-box;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 6px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 2; background: #f5f6f8; padding: 6px 10px; border-bottom: 1px solid #ccc; text-align: left; white-space: nowrap; user-select: none;"
}

pub fn tab_button_style(active: bool) -> &'static str {
    if active {
        "padding: 4px 10px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px;"
    } else {
        "padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 6px;"
    }
}

pub fn notice_style(is_error: bool) -> &'static str {
    if is_error {
        "color: #b42318; background: #fef3f2; border: 1px solid #fda29b; padding: 4px 10px; border-radius: 6px;"
    } else {
        "color: #05603a; background: #ecfdf3; border: 1px solid #6ce9a6; padding: 4px 10px; border-radius: 6px;"
    }
}
