//! Application state for the API server

use crate::{Config, FileGateway};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone) and provides
/// access to the gateway instance and configuration.
#[derive(Clone)]
pub struct AppState {
    /// The main FileGateway instance
    pub gateway: Arc<FileGateway>,

    /// Configuration (for read access)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(gateway: Arc<FileGateway>, config: Arc<Config>) -> Self {
        Self { gateway, config }
    }
}
