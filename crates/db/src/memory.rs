//! In-process [`CharacterStore`] used by the suite's own tests.
//!
//! Clones share the same map, so a stubbed service and the run context can
//! write and read the same documents.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use forge_core::character::CharacterDocument;
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::CharacterStore;

#[derive(Clone, Default)]
pub struct InMemoryCharacterStore {
    documents: Arc<RwLock<BTreeMap<String, CharacterDocument>>>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document keyed by its `_id`.
    pub async fn upsert(&self, document: CharacterDocument) {
        self.documents
            .write()
            .await
            .insert(document.id.clone(), document);
    }

    /// Snapshot of every stored document, ordered by `_id`.
    pub async fn all(&self) -> Vec<CharacterDocument> {
        self.documents.read().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl CharacterStore for InMemoryCharacterStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<CharacterDocument>, DbError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<CharacterDocument>, DbError> {
        Ok(self
            .documents
            .read()
            .await
            .values()
            .filter(|doc| doc.status == status)
            .cloned()
            .collect())
    }

    async fn close(&self) -> Result<(), DbError> {
        Ok(())
    }
}
