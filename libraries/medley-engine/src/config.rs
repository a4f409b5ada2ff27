/// Engine configuration
use medley_core::error::{MedleyError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Base URL under which the engine is reachable, used to synthesize
    /// cover retrieval URLs
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration_hours")]
    pub jwt_expiration_hours: u64,
}

impl EngineConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("medley.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with MEDLEY_, with
        // "__" separating nesting levels so single keys keep their
        // underscores: MEDLEY_PUBLIC_BASE_URL, MEDLEY_AUTH__JWT_SECRET)
        settings = settings.add_source(
            config::Environment::with_prefix("MEDLEY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| MedleyError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| MedleyError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.public_base_url.trim().is_empty() {
            return Err(MedleyError::Config(
                "public base URL is required (set MEDLEY_PUBLIC_BASE_URL)".to_string(),
            ));
        }

        if self.auth.jwt_secret.is_empty() {
            return Err(MedleyError::Config(
                "JWT secret is required (set MEDLEY_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_public_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        jwt_expiration_hours: default_jwt_expiration_hours(),
    }
}

fn default_jwt_expiration_hours() -> u64 {
    24
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            auth: default_auth(),
        }
    }
}
