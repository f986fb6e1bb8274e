//! Configuration types for filegate

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use utoipa::ToSchema;

/// File storage configuration (where stored bytes live on disk)
///
/// Groups settings related to locating stored file content.
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageConfig {
    /// Root directory containing stored files under their archive names
    /// (default: "./files")
    #[serde(default = "default_files_root")]
    #[schema(value_type = String)]
    pub files_root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            files_root: default_files_root(),
        }
    }
}

/// Data storage and state management configuration
///
/// Groups settings related to persistence of file records.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PersistenceConfig {
    /// Database path (default: "./filegate.db")
    #[serde(default = "default_database_path")]
    #[schema(value_type = String)]
    pub database_path: PathBuf,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

/// Main configuration for the file gateway
///
/// Fields are organized into logical sub-configs for maintainability:
/// - [`storage`](StorageConfig) — on-disk file storage location
/// - [`persistence`](PersistenceConfig) — file record database
/// - [`server`](ServerIntegrationConfig) — REST API integration
///
/// The storage and server sub-configs are flattened for serialization,
/// meaning the JSON/TOML format stays flat (no nesting).
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// On-disk file storage settings
    #[serde(flatten)]
    pub storage: StorageConfig,

    /// File record database settings
    pub persistence: PersistenceConfig,

    /// API and external server integration
    #[serde(flatten)]
    pub server: ServerIntegrationConfig,
}

// Convenience accessors — allow call sites to use `config.files_root()` etc.
// without reaching through the sub-config structs.
impl Config {
    /// Root directory for stored file bytes
    pub fn files_root(&self) -> &PathBuf {
        &self.storage.files_root
    }

    /// Path of the file record database
    pub fn database_path(&self) -> &PathBuf {
        &self.persistence.database_path
    }
}

/// API and external server integration configuration
///
/// Groups settings for external access and control interfaces.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ServerIntegrationConfig {
    /// REST API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Address to bind to (default: 127.0.0.1:6780)
    #[serde(default = "default_bind_address")]
    #[schema(value_type = String)]
    pub bind_address: SocketAddr,

    /// Optional API key for authentication
    #[serde(default)]
    pub api_key: Option<String>,

    /// Enable CORS for browser access (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            api_key: None,
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Rate limiting configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RateLimitConfig {
    /// Enable rate limiting (default: false)
    #[serde(default)]
    pub enabled: bool,

    /// Requests per second per IP (default: 100)
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// Burst size (default: 200)
    #[serde(default = "default_burst_size")]
    pub burst_size: u32,

    /// Endpoints exempt from rate limiting
    #[serde(default = "default_exempt_paths")]
    pub exempt_paths: Vec<String>,

    /// IPs exempt from rate limiting (e.g., localhost)
    #[serde(default = "default_exempt_ips")]
    #[schema(value_type = Vec<String>)]
    pub exempt_ips: Vec<std::net::IpAddr>,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            requests_per_second: 100,
            burst_size: 200,
            exempt_paths: default_exempt_paths(),
            exempt_ips: default_exempt_ips(),
        }
    }
}

fn default_files_root() -> PathBuf {
    PathBuf::from("./files")
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./filegate.db")
}

fn default_bind_address() -> SocketAddr {
    // Safe to unwrap: the literal always parses
    #[allow(clippy::unwrap_used)]
    "127.0.0.1:6780".parse().unwrap()
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_requests_per_second() -> u32 {
    100
}

fn default_burst_size() -> u32 {
    200
}

fn default_exempt_paths() -> Vec<String> {
    vec!["/health".to_string()]
}

fn default_exempt_ips() -> Vec<std::net::IpAddr> {
    vec![]
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();

        assert_eq!(config.files_root(), &PathBuf::from("./files"));
        assert_eq!(config.database_path(), &PathBuf::from("./filegate.db"));
        assert_eq!(
            config.server.api.bind_address,
            "127.0.0.1:6780".parse::<SocketAddr>().unwrap()
        );
        assert!(config.server.api.api_key.is_none());
        assert!(config.server.api.cors_enabled);
        assert!(config.server.api.swagger_ui);
        assert!(!config.server.api.rate_limit.enabled);
    }

    #[test]
    fn empty_json_deserializes_to_defaults() {
        // persistence is the only non-flattened, non-defaulted-at-top field
        let config: Config = serde_json::from_str(r#"{"persistence": {}}"#).unwrap();

        assert_eq!(config.files_root(), &PathBuf::from("./files"));
        assert_eq!(config.database_path(), &PathBuf::from("./filegate.db"));
        assert!(config.server.api.cors_enabled);
    }

    #[test]
    fn flattened_fields_stay_at_top_level() {
        let config = Config::default();
        let json = serde_json::to_value(&config).unwrap();

        // storage and server sub-configs are flattened
        assert!(json.get("files_root").is_some());
        assert!(json.get("api").is_some());
        // persistence stays nested
        assert!(json["persistence"].get("database_path").is_some());
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = Config::default();
        config.storage.files_root = PathBuf::from("/srv/archive");
        config.server.api.api_key = Some("secret".to_string());
        config.server.api.rate_limit.enabled = true;
        config.server.api.rate_limit.requests_per_second = 5;

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(back.files_root(), &PathBuf::from("/srv/archive"));
        assert_eq!(back.server.api.api_key.as_deref(), Some("secret"));
        assert!(back.server.api.rate_limit.enabled);
        assert_eq!(back.server.api.rate_limit.requests_per_second, 5);
    }

    #[test]
    fn rate_limit_defaults_exempt_health() {
        let rl = RateLimitConfig::default();
        assert_eq!(rl.exempt_paths, vec!["/health".to_string()]);
        assert!(rl.exempt_ips.is_empty());
    }
}
