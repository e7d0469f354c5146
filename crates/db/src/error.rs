/// Errors from the character store.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Driver-level failure (connection, query, decode).
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
