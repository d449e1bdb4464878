use std::collections::BTreeMap;

use crate::domain::view::value::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Case-insensitive substring match.
    Contains(String),
    /// Field must equal one of the listed values (case-insensitive).
    OneOf(Vec<String>),
}

impl FilterValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Contains(term) => term.trim().is_empty(),
            FilterValue::OneOf(options) => options.iter().all(|option| option.trim().is_empty()),
        }
    }

    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            FilterValue::Contains(term) => value.contains_lowered(&term.trim().to_lowercase()),
            FilterValue::OneOf(options) => {
                if value.is_null() {
                    return false;
                }
                let plain = value.plain().to_lowercase();
                options
                    .iter()
                    .any(|option| option.trim().to_lowercase() == plain)
            }
        }
    }

    /// Form sent to the record source as a query parameter.
    pub fn query_value(&self) -> String {
        match self {
            FilterValue::Contains(term) => term.trim().to_string(),
            FilterValue::OneOf(options) => options
                .iter()
                .map(|option| option.trim())
                .filter(|option| !option.is_empty())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Contains(value.to_string())
    }
}

/// Active per-field constraints. Entries are AND-ed; empty values never stay stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    entries: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears one field. Returns whether the state changed.
    pub fn set_filter(&mut self, field: &str, value: Option<FilterValue>) -> bool {
        match value.filter(|value| !value.is_empty()) {
            Some(value) => self.entries.insert(field.to_string(), value.clone()) != Some(value),
            None => self.entries.remove(field).is_some(),
        }
    }

    pub fn clear_all(&mut self) -> bool {
        let changed = !self.entries.is_empty();
        self.entries.clear();
        changed
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.entries.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }
}
