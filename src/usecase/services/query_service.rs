use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::page::Page;
use crate::domain::entities::record::Record;
use crate::usecase::ports::source::{PageCriteria, RecordSource, SourceError};

pub struct QueryService<T: Record> {
    source: Arc<dyn RecordSource<T>>,
}

impl<T: Record> Clone for QueryService<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: Record> QueryService<T> {
    pub fn new(source: Arc<dyn RecordSource<T>>) -> Self {
        Self { source }
    }

    pub fn fetch_page(&self, criteria: &PageCriteria) -> Result<Page<T>, SourceError> {
        debug!(resource = T::RESOURCE, ?criteria, "fetching page");
        match self.source.fetch_page(criteria) {
            Ok(page) => {
                debug!(
                    resource = T::RESOURCE,
                    items = page.items.len(),
                    total = page.total_items,
                    page = page.current_page,
                    "page loaded"
                );
                Ok(page)
            }
            Err(err) => {
                warn!(resource = T::RESOURCE, error = %err, "page fetch failed");
                Err(err)
            }
        }
    }
}
