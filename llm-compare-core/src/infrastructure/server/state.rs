use crate::application::ComparisonEngine;
use std::sync::Arc;

pub(crate) struct ServerState {
    engine: Arc<ComparisonEngine>,
}

impl ServerState {
    pub(crate) fn new(engine: Arc<ComparisonEngine>) -> Self {
        Self { engine }
    }

    pub(crate) fn engine(&self) -> Arc<ComparisonEngine> {
        Arc::clone(&self.engine)
    }
}
