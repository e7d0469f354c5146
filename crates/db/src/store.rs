use async_trait::async_trait;
use forge_core::character::CharacterDocument;

use crate::error::DbError;

/// Lookups the suite performs against persisted characters.
///
/// Implementations are shared behind an `Arc` by the run context, which
/// calls [`close`](CharacterStore::close) once after the last scenario.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Exact lookup by application-assigned `_id`.
    async fn find_by_id(&self, id: &str) -> Result<Option<CharacterDocument>, DbError>;

    /// All documents whose `status` equals `status`.
    async fn find_by_status(&self, status: &str) -> Result<Vec<CharacterDocument>, DbError>;

    /// Release the underlying connection.
    async fn close(&self) -> Result<(), DbError>;
}
