use forge_core::config::require_env;
use forge_core::error::ConfigError;

/// Where the service under test lives.
///
/// | Env Var    | Required |
/// |------------|----------|
/// | `BASE_URL` | yes      |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = require_env(
            "BASE_URL",
            "Create a .env file in the project root with BASE_URL=http://localhost:3001",
        )?;
        Ok(Self { base_url })
    }
}
