//! The site replication admin port.

use crate::error::AdminResult;
use crate::types::{
    PeerInfo, PeerSite, ReplicateAddStatus, ReplicateEditStatus, ReplicateRemoveStatus,
    SiteReplicationInfo, SrRemoveReq,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Site replication calls the console makes against the admin service.
///
/// Callers that need a deadline wrap the returned future in
/// `tokio::time::timeout`; dropping the future cancels the call.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SiteReplicationAdmin: Send + Sync {
    /// Retrieve the current site replication configuration.
    async fn get_site_replication_info(&self) -> AdminResult<SiteReplicationInfo>;

    /// Add peer sites to replication.
    async fn add_site_replication_info(
        &self,
        sites: Vec<PeerSite>,
    ) -> AdminResult<ReplicateAddStatus>;

    /// Change the endpoint or name of a site, identified by deployment id.
    async fn edit_site_replication_info(&self, site: PeerInfo) -> AdminResult<ReplicateEditStatus>;

    /// Remove the requested sites, or all of them.
    async fn delete_site_replication_info(
        &self,
        remove_req: SrRemoveReq,
    ) -> AdminResult<ReplicateRemoveStatus>;
}

#[async_trait]
impl<T: SiteReplicationAdmin + ?Sized> SiteReplicationAdmin for Arc<T> {
    async fn get_site_replication_info(&self) -> AdminResult<SiteReplicationInfo> {
        (**self).get_site_replication_info().await
    }

    async fn add_site_replication_info(
        &self,
        sites: Vec<PeerSite>,
    ) -> AdminResult<ReplicateAddStatus> {
        (**self).add_site_replication_info(sites).await
    }

    async fn edit_site_replication_info(&self, site: PeerInfo) -> AdminResult<ReplicateEditStatus> {
        (**self).edit_site_replication_info(site).await
    }

    async fn delete_site_replication_info(
        &self,
        remove_req: SrRemoveReq,
    ) -> AdminResult<ReplicateRemoveStatus> {
        (**self).delete_site_replication_info(remove_req).await
    }
}
