//! REST API server example
//!
//! This example shows how to run filegate with the REST API enabled,
//! serving a demo file under its original name.
//!
//! After starting, you can:
//! - View Swagger UI at http://localhost:6780/swagger-ui
//! - List file records via GET http://localhost:6780/files
//! - Download the demo file via GET http://localhost:6780/files/download/1

use filegate::api::start_api_server;
use filegate::config::{ApiConfig, Config, ServerIntegrationConfig, StorageConfig};
use filegate::db::NewFileRecord;
use filegate::url::download_url;
use filegate::FileGateway;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure API
    let api_config = ApiConfig {
        bind_address: "127.0.0.1:6780".parse::<SocketAddr>()?,
        api_key: None, // No authentication for local use
        cors_enabled: true,
        cors_origins: vec!["*".to_string()],
        swagger_ui: true,
        ..Default::default()
    };

    // Build configuration
    let config = Config {
        storage: StorageConfig {
            files_root: "files".into(),
        },
        server: ServerIntegrationConfig { api: api_config },
        ..Default::default()
    };

    // Create gateway instance
    let gateway = Arc::new(FileGateway::new(config).await?);

    // Store a demo file under an obfuscated archive name and register it
    let archive_name = "b2c4e6a8d0f1.txt";
    let content = b"Hello from filegate!\n";
    tokio::fs::write(gateway.config.files_root().join(archive_name), content).await?;

    let id = gateway
        .register_file(NewFileRecord {
            original_filename: "welcome note.txt".to_string(),
            archive_filename: archive_name.to_string(),
            mime_browser: "text/plain".to_string(),
            size_bytes: content.len() as i64,
        })
        .await?;

    println!("Starting filegate REST API server");
    println!("Swagger UI: http://localhost:6780/swagger-ui");
    println!();
    println!("Example commands:");
    println!("  # List file records");
    println!("  curl http://localhost:6780/files");
    println!();
    println!("  # Download the demo file under its original name");
    println!("  curl -OJ http://localhost:6780/{}", download_url(id));

    // Start API server (blocks until shutdown)
    start_api_server(gateway.clone(), gateway.config.clone()).await?;

    Ok(())
}
