//! Read-side access to the `characters` collection.
//!
//! The suite never writes through this crate: it only looks documents up to
//! cross-check what the service persisted. [`CharacterStore`] is the seam;
//! [`MongoCharacterStore`] talks to the real database and
//! [`InMemoryCharacterStore`] backs the suite's own tests.

pub mod config;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod store;

pub use config::MongoConfig;
pub use error::DbError;
pub use memory::InMemoryCharacterStore;
pub use mongo::MongoCharacterStore;
pub use store::CharacterStore;

/// Name of the collection holding character documents.
pub const COLLECTION_NAME: &str = "characters";
