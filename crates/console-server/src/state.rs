//! Shared handler state.

use crate::services::SiteReplicationService;
use console_admin::SiteReplicationAdmin;
use console_common_config::ConsoleConfig;
use std::sync::Arc;
use std::time::Duration;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Site replication calls, bounded by the admin timeout.
    pub site_replication: SiteReplicationService,
    /// Deadline for a whole HTTP request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Build the state from the config and an admin client.
    pub fn new(admin: Arc<dyn SiteReplicationAdmin>, config: &ConsoleConfig) -> Self {
        Self {
            site_replication: SiteReplicationService::new(admin, config.admin.timeout()),
            request_timeout: config.server.request_timeout(),
        }
    }
}
