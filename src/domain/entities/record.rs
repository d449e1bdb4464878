use serde::de::DeserializeOwned;

use crate::domain::view::column::Column;

/// A mutating action confirmed through the action dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordAction {
    Delete,
    UpdateStatus(String),
}

impl RecordAction {
    pub fn label(&self) -> String {
        match self {
            RecordAction::Delete => "Excluir".to_string(),
            RecordAction::UpdateStatus(status) => format!("Alterar status para {status}"),
        }
    }
}

/// A domain entity listed by one of the screens.
pub trait Record: Clone + PartialEq + DeserializeOwned + Send + 'static {
    /// REST collection name, e.g. `funcionarios`.
    const RESOURCE: &'static str;
    const TITLE: &'static str;

    /// Stable unique key, used for rendering and as mutation target.
    fn key(&self) -> &str;

    /// Short human label shown in confirmation dialogs.
    fn describe(&self) -> String;

    fn columns() -> Vec<Column<Self>>;

    /// Statuses the user may switch a record to. Empty means no status action.
    fn status_options() -> &'static [&'static str] {
        &[]
    }

    fn set_status(&mut self, _status: &str) -> bool {
        false
    }
}

/// Deserializers that fold the upstream API's loose typing into one shape.
pub mod de {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Value::Number(number) => Ok(number.to_string()),
            other => Err(serde::de::Error::custom(format!("invalid record id: {other}"))),
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(value_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(value_to_text(Value::deserialize(deserializer)?))
    }

    pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => parse_decimal(&text),
            _ => None,
        })
    }

    pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => parse_date(&text),
            _ => None,
        })
    }

    /// Related records may be embedded as objects; their name is used.
    fn value_to_text(value: Value) -> Option<String> {
        match value {
            Value::String(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Object(mut map) => ["nome", "Nome", "name"]
                .iter()
                .find_map(|key| map.remove(*key))
                .and_then(value_to_text),
            Value::Null | Value::Array(_) => None,
        }
    }

    /// Accepts `1234.56` as well as the pt-BR `1.234,56`.
    pub fn parse_decimal(text: &str) -> Option<f64> {
        let cleaned: String = text
            .trim()
            .trim_start_matches("R$")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        let normalized = if cleaned.contains(',') {
            cleaned.replace('.', "").replace(',', ".")
        } else {
            cleaned
        };
        normalized.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    pub fn parse_date(text: &str) -> Option<NaiveDate> {
        let trimmed = text.trim();
        if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(date_time.date_naive());
        }
        let head = trimmed.get(..10).unwrap_or(trimmed);
        NaiveDate::parse_from_str(head, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(head, "%d/%m/%Y"))
            .ok()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parse_decimal_accepts_both_separators() {
            assert_eq!(parse_decimal("1234.56"), Some(1234.56));
            assert_eq!(parse_decimal("R$ 1.234,56"), Some(1234.56));
            assert_eq!(parse_decimal(""), None);
            assert_eq!(parse_decimal("abc"), None);
        }

        #[test]
        fn parse_date_accepts_iso_timestamps_and_br_dates() {
            let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
            assert_eq!(parse_date("2024-03-09"), expected);
            assert_eq!(parse_date("2024-03-09T13:45:00.000Z"), expected);
            assert_eq!(parse_date("09/03/2024"), expected);
            assert_eq!(parse_date("ontem"), None);
        }
    }
}
