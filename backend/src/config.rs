use anyhow::Result;
use std::env;

/// Application environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    /// Cluster name for explorer URLs (devnet, testnet, mainnet)
    pub cluster: String,
    /// Application environment
    pub environment: Environment,
    /// Allowed CORS origins (comma-separated); empty means allow any
    pub cors_origins: Vec<String>,
    /// Preload the sample wallets on startup
    pub seed_demo_entries: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Parse environment first
        let environment = match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
            .as_str()
        {
            "production" | "prod" => Environment::Production,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        };

        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());

        let cluster = env::var("SOLANA_CLUSTER").unwrap_or_else(|_| "devnet".to_string());

        // Parse CORS origins
        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| {
                if environment.is_development() {
                    "http://localhost:3000,http://localhost:3001,http://127.0.0.1:3000".to_string()
                } else {
                    String::new()
                }
            })
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let seed_demo_entries = env::var("SEED_DEMO_ENTRIES")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or_else(|_| environment.is_development());

        if environment.is_production() {
            if cors_origins.is_empty() {
                panic!("CORS_ORIGINS must be set in production environment");
            }
            tracing::info!("Running in PRODUCTION mode");
        } else if environment == Environment::Staging {
            tracing::info!("Running in STAGING mode");
        } else {
            tracing::warn!("Running in DEVELOPMENT mode - NOT FOR PRODUCTION USE");
        }

        Ok(Self {
            server_addr,
            cluster,
            environment,
            cors_origins,
            seed_demo_entries,
        })
    }
}
