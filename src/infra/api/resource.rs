use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::page::Page;
use crate::domain::entities::record::{Record, RecordAction};
use crate::infra::api::client::ApiClient;
use crate::infra::api::envelope::{decode_mutation, decode_page};
use crate::usecase::ports::source::{
    MutationEndpoint, MutationOutcome, PageCriteria, RecordSource, SourceError,
};

/// One REST collection (`/funcionarios`, `/orcamentos`, ...) of the API.
pub struct ApiResource<T> {
    client: Arc<ApiClient>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> ApiResource<T> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }
}

impl<T: Record> RecordSource<T> for ApiResource<T> {
    fn fetch_page(&self, criteria: &PageCriteria) -> Result<Page<T>, SourceError> {
        let response = self.client.get(&[T::RESOURCE], &criteria.query_pairs())?;
        decode_page(&response, criteria)
    }
}

impl<T: Record> MutationEndpoint for ApiResource<T> {
    fn mutate(&self, id: &str, action: &RecordAction) -> Result<MutationOutcome, SourceError> {
        let response = match action {
            RecordAction::Delete => self.client.delete(&[T::RESOURCE, id])?,
            RecordAction::UpdateStatus(status) => self
                .client
                .patch_json(&[T::RESOURCE, id, "status"], &json!({ "status": status }))?,
        };
        decode_mutation(&response)
    }
}
