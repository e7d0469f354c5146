//! MongoDB-backed [`CharacterStore`].

use async_trait::async_trait;
use forge_core::character::CharacterDocument;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::config::MongoConfig;
use crate::error::DbError;
use crate::store::CharacterStore;
use crate::COLLECTION_NAME;

/// Connection to the database the service under test writes to.
pub struct MongoCharacterStore {
    client: Client,
    collection: Collection<CharacterDocument>,
}

impl MongoCharacterStore {
    /// Connect and verify the server answers a `ping`.
    pub async fn connect(config: &MongoConfig) -> Result<Self, DbError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.db_name);

        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(db = %config.db_name, "Connected to MongoDB");

        let collection = database.collection::<CharacterDocument>(COLLECTION_NAME);
        Ok(Self { client, collection })
    }
}

#[async_trait]
impl CharacterStore for MongoCharacterStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<CharacterDocument>, DbError> {
        tracing::debug!(id, "Looking up character document");
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document)
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<CharacterDocument>, DbError> {
        tracing::debug!(status, "Listing character documents by status");
        let cursor = self.collection.find(doc! { "status": status }).await?;
        let documents: Vec<CharacterDocument> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn close(&self) -> Result<(), DbError> {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB connection closed");
        Ok(())
    }
}
