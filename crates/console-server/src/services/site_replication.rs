//! Site replication service.

use crate::models::{
    PeerInfoEditRequest, PeerSiteEditResponse, PeerSiteRemoveRequest, PeerSiteRemoveResponse,
    PeerSiteRequest, SiteReplicationAddResponse, SiteReplicationInfoResponse,
};
use console_admin::{AdminError, AdminResult, PeerSite, SiteReplicationAdmin, SiteReplicationOp};
use console_common_log::spans::{admin_span, record_error};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn, Instrument};

/// Validates console requests and forwards them to the admin port.
///
/// Every call is bounded by `timeout` and is attempted once.
#[derive(Clone)]
pub struct SiteReplicationService {
    admin: Arc<dyn SiteReplicationAdmin>,
    timeout: Duration,
}

impl SiteReplicationService {
    /// Create a service bounded by `timeout` per admin call.
    pub fn new(admin: Arc<dyn SiteReplicationAdmin>, timeout: Duration) -> Self {
        Self { admin, timeout }
    }

    /// Per-call deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Current replication config. Peers are listed only when enabled.
    pub async fn get_config(&self) -> AdminResult<SiteReplicationInfoResponse> {
        let info = self
            .call(SiteReplicationOp::Info, self.admin.get_site_replication_info())
            .await?;
        Ok(info.into())
    }

    /// Add peer sites. An empty list is rejected.
    pub async fn add_sites(
        &self,
        sites: Vec<PeerSiteRequest>,
    ) -> AdminResult<SiteReplicationAddResponse> {
        if sites.is_empty() {
            return Err(AdminError::invalid("at least one site is required"));
        }

        let sites: Vec<PeerSite> = sites.into_iter().map(PeerSite::from).collect();
        let status = self
            .call(SiteReplicationOp::Add, self.admin.add_site_replication_info(sites))
            .await?;
        Ok(status.into())
    }

    /// Edit one peer site. The deployment id must not be blank.
    pub async fn edit_site(&self, req: PeerInfoEditRequest) -> AdminResult<PeerSiteEditResponse> {
        if req.deployment_id.trim().is_empty() {
            return Err(AdminError::invalid("deploymentID is required"));
        }

        let status = self
            .call(SiteReplicationOp::Edit, self.admin.edit_site_replication_info(req.into()))
            .await?;
        Ok(status.into())
    }

    /// Remove the named sites, or every site when `all` is set.
    pub async fn remove_sites(
        &self,
        req: PeerSiteRemoveRequest,
    ) -> AdminResult<PeerSiteRemoveResponse> {
        if !req.all && req.sites.is_empty() {
            return Err(AdminError::invalid(
                "either all must be set or at least one site named",
            ));
        }

        let status = self
            .call(SiteReplicationOp::Remove, self.admin.delete_site_replication_info(req.into()))
            .await?;
        Ok(status.into())
    }

    async fn call<T, F>(&self, op: SiteReplicationOp, fut: F) -> AdminResult<T>
    where
        F: Future<Output = AdminResult<T>>,
    {
        let timeout = self.timeout;
        async move {
            let result = match tokio::time::timeout(timeout, fut).await {
                Ok(result) => result,
                Err(_) => Err(AdminError::Timeout(timeout)),
            };

            match &result {
                Ok(_) => debug!(%op, "admin call succeeded"),
                Err(e) => {
                    record_error(e);
                    warn!(%op, error = %e, "admin call failed");
                }
            }
            result
        }
        .instrument(admin_span(op.as_str()))
        .await
    }
}
