use serde::Deserialize;
use thiserror::Error;

use crate::domain::entities::page::Page;
use crate::domain::entities::record::{Record, RecordAction};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("falha de conexão: {0}")]
    Network(String),
    #[error("erro HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// The API answered with an `{ "error": ... }` envelope.
    #[error("{0}")]
    Api(String),
    /// A mutation came back with `success: false`.
    #[error("{0}")]
    Rejected(String),
}

impl From<tokio::task::JoinError> for SourceError {
    fn from(err: tokio::task::JoinError) -> Self {
        SourceError::Network(err.to_string())
    }
}

/// What to ask the record source for. Unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCriteria {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
}

impl PageCriteria {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search".to_string(), search.trim().to_string()));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MutationOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

pub trait RecordSource<T: Record>: Send + Sync {
    fn fetch_page(&self, criteria: &PageCriteria) -> Result<Page<T>, SourceError>;
}

pub trait MutationEndpoint: Send + Sync {
    fn mutate(&self, id: &str, action: &RecordAction) -> Result<MutationOutcome, SourceError>;
}
