use forge_core::config::require_env;
use forge_core::error::ConfigError;

/// MongoDB connection settings.
///
/// | Env Var         | Required |
/// |-----------------|----------|
/// | `MONGO_URI`     | yes      |
/// | `MONGO_DB_NAME` | yes      |
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub db_name: String,
}

impl MongoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let uri = require_env(
            "MONGO_URI",
            "Add MONGO_URI=mongodb://localhost:27017 to the .env file in the project root",
        )?;
        let db_name = require_env(
            "MONGO_DB_NAME",
            "Add MONGO_DB_NAME=<database> to the .env file in the project root",
        )?;

        Ok(Self { uri, db_name })
    }
}
