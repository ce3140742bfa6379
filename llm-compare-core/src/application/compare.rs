//! Fan-out comparison engine
//!
//! One prompt goes to every requested backend concurrently. Unknown names
//! reject the whole call before anything is dispatched; everything that goes
//! wrong after that point is folded into the affected backend's result.

use futures::future::join_all;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use super::aggregator::ResultAggregator;
use crate::constants::SYSTEM_PROMPT;
use crate::domain::{ComparisonRequest, ComparisonResult, ModelResult};
use crate::infrastructure::model::{ModelRegistry, ModelRequest};

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("The following models are not available: {}", .models.join(", "))]
    ModelNotFound { models: Vec<String> },
}

pub struct ComparisonEngine {
    registry: Arc<ModelRegistry>,
}

impl ComparisonEngine {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    pub fn available_models(&self) -> BTreeSet<String> {
        self.registry.names()
    }

    /// Sends the prompt to every requested backend and waits for all of them.
    ///
    /// Results come back in request order, one per requested name, duplicates
    /// included. Only [`CompareError::ModelNotFound`] escapes; provider
    /// errors and task panics become `"Error: ..."` results.
    pub async fn compare(
        &self,
        request: ComparisonRequest,
    ) -> Result<ComparisonResult, CompareError> {
        let ComparisonRequest { prompt, backends } = request;

        let unknown = self.registry.unknown(&backends);
        if !unknown.is_empty() {
            warn!(?unknown, "Rejecting comparison with unknown backends");
            return Err(CompareError::ModelNotFound { models: unknown });
        }

        info!(backends = backends.len(), "Dispatching comparison");
        let prompt: Arc<str> = Arc::from(prompt);
        let handles = backends.iter().map(|backend| {
            let registry = Arc::clone(&self.registry);
            let prompt = Arc::clone(&prompt);
            let backend = backend.clone();
            tokio::spawn(async move { dispatch(&registry, &backend, &prompt).await })
        });
        let outcomes = join_all(handles).await;

        let results: ComparisonResult = backends
            .iter()
            .zip(outcomes)
            .map(|(backend, outcome)| {
                outcome.unwrap_or_else(|join_error| {
                    error!(backend = backend.as_str(), %join_error, "Dispatch task aborted");
                    ResultAggregator::failure(backend, join_error)
                })
            })
            .collect();

        let failed = results.iter().filter(|r| !r.is_success()).count();
        info!(backends = results.len(), failed, "Comparison completed");
        Ok(results)
    }
}

async fn dispatch(registry: &ModelRegistry, backend: &str, prompt: &str) -> ModelResult {
    let client = match registry.resolve(backend) {
        Ok(client) => client,
        Err(error) => {
            error!(backend, %error, "Failed to resolve backend");
            return ResultAggregator::failure(backend, error);
        }
    };

    debug!(backend, client = client.id(), "Sending prompt");
    let started = Instant::now();
    match client.chat(ModelRequest::new(SYSTEM_PROMPT, prompt)).await {
        Ok(response) => {
            let elapsed = started.elapsed();
            debug!(
                backend,
                elapsed_ms = elapsed.as_millis() as u64,
                "Backend responded"
            );
            ResultAggregator::success(backend, response, elapsed)
        }
        Err(error) => {
            error!(backend, %error, "Backend call failed");
            ResultAggregator::failure(backend, error)
        }
    }
}
