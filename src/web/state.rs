use std::sync::Arc;

use crate::{model::Catalog, session::SessionStore};

#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    sessions: SessionStore,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: SessionStore::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}
