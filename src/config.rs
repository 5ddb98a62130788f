use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub node: NodeConfig,
    pub tokens: TokenConfig,
}

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_address: String,
    pub data_dir: String,
}

#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret. Loaded once at startup, immutable for the
    /// process lifetime, shared by issuing and verifying code paths.
    pub secret: String,
    pub token_ttl_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let secret = std::env::var("API_SECRET").unwrap_or_default();

        let token_ttl_seconds = std::env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600);

        let config = Config {
            node: NodeConfig {
                bind_address,
                data_dir,
            },
            tokens: TokenConfig {
                secret,
                token_ttl_seconds,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tokens.secret.is_empty() {
            return Err(ConfigError::ValidationError(
                "API_SECRET must be set".to_string(),
            ));
        }

        if self.tokens.token_ttl_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "TOKEN_TTL_SECONDS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
