use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::record::RecordAction;
use crate::usecase::ports::source::{MutationEndpoint, SourceError};

#[derive(Clone)]
pub struct EditService {
    resource: &'static str,
    endpoint: Arc<dyn MutationEndpoint>,
}

impl EditService {
    pub fn new(resource: &'static str, endpoint: Arc<dyn MutationEndpoint>) -> Self {
        Self { resource, endpoint }
    }

    /// Runs one action. `success: false` answers become [`SourceError::Rejected`];
    /// on success the backend's message is returned.
    pub fn apply(&self, id: &str, action: &RecordAction) -> Result<String, SourceError> {
        let outcome = self.endpoint.mutate(id, action).inspect_err(|err| {
            warn!(resource = self.resource, id, ?action, error = %err, "mutation failed");
        })?;

        if !outcome.success {
            warn!(
                resource = self.resource,
                id,
                ?action,
                message = %outcome.message,
                "mutation rejected"
            );
            let message = if outcome.message.trim().is_empty() {
                "operação recusada pelo servidor".to_string()
            } else {
                outcome.message
            };
            return Err(SourceError::Rejected(message));
        }

        info!(resource = self.resource, id, ?action, "mutation applied");
        Ok(outcome.message)
    }
}
