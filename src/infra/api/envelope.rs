//! Decoding of the API's `{dados, paginacao}` / `{error}` envelopes.
//!
//! Shapes that do not match are folded into something renderable (the
//! decodable items, default pagination) instead of failing the view.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::entities::page::Page;
use crate::domain::entities::record::Record;
use crate::infra::api::client::ApiResponse;
use crate::usecase::ports::source::{MutationOutcome, PageCriteria, SourceError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct Paginacao {
    #[serde(rename = "totalItens", alias = "totalItems")]
    total_itens: Option<u64>,
    #[serde(rename = "totalPages", alias = "totalPaginas")]
    total_pages: Option<u32>,
    #[serde(rename = "currentPage", alias = "paginaAtual")]
    current_page: Option<u32>,
    #[serde(rename = "pageSize")]
    page_size: Option<u32>,
}

pub fn decode_page<T: Record>(
    response: &ApiResponse,
    criteria: &PageCriteria,
) -> Result<Page<T>, SourceError> {
    let value = match serde_json::from_str::<Value>(&response.body) {
        Ok(value) => value,
        Err(err) if response.is_success() => {
            warn!(resource = T::RESOURCE, error = %err, "response is not JSON, showing empty list");
            return Ok(empty_page(criteria));
        }
        Err(_) => return Err(http_error(response)),
    };

    if let Some(message) = error_message(&value) {
        return Err(SourceError::Api(message));
    }
    if !response.is_success() {
        return Err(http_error(response));
    }

    match value {
        Value::Array(items) => Ok(Page::unpaginated(decode_items(items))),
        Value::Object(map) => Ok(page_from_object::<T>(map, criteria)),
        other => {
            warn!(resource = T::RESOURCE, kind = %kind_of(&other), "unexpected page shape");
            Ok(empty_page(criteria))
        }
    }
}

fn page_from_object<T: Record>(mut map: Map<String, Value>, criteria: &PageCriteria) -> Page<T> {
    let items = match map.remove("dados") {
        Some(Value::Array(items)) => decode_items(items),
        Some(other) => {
            warn!(resource = T::RESOURCE, kind = %kind_of(&other), "`dados` is not a list");
            Vec::new()
        }
        None => {
            warn!(resource = T::RESOURCE, "envelope without `dados`");
            Vec::new()
        }
    };

    let meta = match map.remove("paginacao") {
        Some(value) => serde_json::from_value::<Paginacao>(value).unwrap_or_else(|err| {
            warn!(resource = T::RESOURCE, error = %err, "unreadable `paginacao`, using defaults");
            Paginacao::default()
        }),
        None => Paginacao::default(),
    };

    let count = items.len();
    Page::new(
        items,
        meta.total_itens.unwrap_or(count as u64),
        meta.total_pages.unwrap_or(0),
        meta.current_page.or(criteria.page).unwrap_or(1),
        meta.page_size
            .or(criteria.page_size)
            .unwrap_or(count as u32),
    )
}

/// Items that fail to decode are dropped one by one.
fn decode_items<T: Record>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .map(drop_casing_duplicates)
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(resource = T::RESOURCE, idx, error = %err, "skipping undecodable record");
                None
            }
        })
        .collect()
}

/// Some payloads carry a field twice under different casings (`nome` and
/// `Nome`, `precoUnitario` and `preco_unitario`). Serde aliases reject that as
/// a duplicate field, so only the camelCase spelling is kept.
fn drop_casing_duplicates(item: Value) -> Value {
    let Value::Object(mut map) = item else {
        return item;
    };
    let canonical = |key: &str| key.replace('_', "").to_lowercase();
    let preferred = |key: &str| {
        key.starts_with(|c: char| c.is_ascii_lowercase()) && !key.contains('_')
    };

    let keys: Vec<String> = map.keys().cloned().collect();
    let mut kept: Vec<&str> = Vec::new();
    let mut dropped: Vec<&str> = Vec::new();
    for key in &keys {
        let twin = kept
            .iter()
            .position(|other| canonical(*other) == canonical(key.as_str()));
        match twin {
            None => kept.push(key.as_str()),
            Some(idx) if preferred(key.as_str()) && !preferred(kept[idx]) => {
                dropped.push(kept[idx]);
                kept[idx] = key.as_str();
            }
            Some(_) => dropped.push(key.as_str()),
        }
    }
    for key in dropped {
        map.remove(key);
    }
    Value::Object(map)
}

fn empty_page<T>(criteria: &PageCriteria) -> Page<T> {
    Page::empty(criteria.page_size.unwrap_or(1))
}

/// `success` and `message` are taken from the body when present, otherwise
/// the HTTP status decides.
pub fn decode_mutation(response: &ApiResponse) -> Result<MutationOutcome, SourceError> {
    let value = serde_json::from_str::<Value>(&response.body).unwrap_or(Value::Null);

    if let Some(success) = value.get("success").and_then(Value::as_bool) {
        let message = value
            .get("message")
            .or_else(|| value.get("error"))
            .map(value_text)
            .unwrap_or_default();
        return Ok(MutationOutcome { success, message });
    }
    if let Some(message) = error_message(&value) {
        return Ok(MutationOutcome {
            success: false,
            message,
        });
    }
    if response.is_success() {
        let message = value.get("message").map(value_text).unwrap_or_default();
        return Ok(MutationOutcome {
            success: true,
            message,
        });
    }
    Err(http_error(response))
}

fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        other => Some(value_text(other)),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn http_error(response: &ApiResponse) -> SourceError {
    let body = response.body.trim();
    let message = if body.is_empty() {
        "sem detalhes".to_string()
    } else {
        body.chars().take(200).collect()
    };
    SourceError::Http {
        status: response.status,
        message,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
