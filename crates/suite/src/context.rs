use std::sync::Arc;

use forge_client::{ApiContext, CharacterApi, HealthApi};
use forge_db::{CharacterStore, DbError};

/// Resources shared by every scenario of a run.
///
/// Built once before the first scenario and handed to the runner by
/// reference; [`close`](SuiteContext::close) is called once after the last.
/// Scenarios never mutate it, so per-scenario state lives in
/// [`World`](crate::world::World) instead.
pub struct SuiteContext {
    api: ApiContext,
    characters: CharacterApi,
    health: HealthApi,
    store: Arc<dyn CharacterStore>,
}

impl SuiteContext {
    pub fn new(api: ApiContext, store: Arc<dyn CharacterStore>) -> Self {
        Self {
            characters: CharacterApi::new(api.clone()),
            health: HealthApi::new(api.clone()),
            api,
            store,
        }
    }

    pub fn api(&self) -> &ApiContext {
        &self.api
    }

    pub fn characters(&self) -> &CharacterApi {
        &self.characters
    }

    pub fn health(&self) -> &HealthApi {
        &self.health
    }

    pub fn store(&self) -> &dyn CharacterStore {
        self.store.as_ref()
    }

    /// Release the database connection. Consumes the context.
    pub async fn close(self) -> Result<(), DbError> {
        self.store.close().await
    }
}
