//! A configurable fake of the site replication port.

use crate::error::{AdminError, AdminResult, SiteReplicationOp};
use crate::port::SiteReplicationAdmin;
use crate::types::{
    PeerInfo, PeerSite, ReplicateAddStatus, ReplicateEditStatus, ReplicateRemoveStatus,
    SiteReplicationInfo, SrRemoveReq,
};
use async_trait::async_trait;
use parking_lot::Mutex;

/// A call received by [`StubSiteReplicationAdmin`], with its request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteReplicationCall {
    /// `get_site_replication_info`
    Info,
    /// `add_site_replication_info` with the sites passed in.
    Add(Vec<PeerSite>),
    /// `edit_site_replication_info` with the site passed in.
    Edit(PeerInfo),
    /// `delete_site_replication_info` with the request passed in.
    Remove(SrRemoveReq),
}

impl SiteReplicationCall {
    /// The operation this call was made for.
    pub fn op(&self) -> SiteReplicationOp {
        match self {
            Self::Info => SiteReplicationOp::Info,
            Self::Add(_) => SiteReplicationOp::Add,
            Self::Edit(_) => SiteReplicationOp::Edit,
            Self::Remove(_) => SiteReplicationOp::Remove,
        }
    }
}

#[derive(Debug, Default)]
struct Responses {
    info: Option<AdminResult<SiteReplicationInfo>>,
    add: Option<AdminResult<ReplicateAddStatus>>,
    edit: Option<AdminResult<ReplicateEditStatus>>,
    remove: Option<AdminResult<ReplicateRemoveStatus>>,
}

/// Returns whatever response was registered for an operation, every time it
/// is called, and records each call.
///
/// ```
/// # tokio_test::block_on(async {
/// use console_admin::{ReplicateRemoveStatus, SiteReplicationAdmin, SrRemoveReq, StubSiteReplicationAdmin};
///
/// let admin = StubSiteReplicationAdmin::new().with_remove_status(ReplicateRemoveStatus::success());
/// let status = admin.delete_site_replication_info(SrRemoveReq::sites(["test1"])).await.unwrap();
/// assert_eq!(status.status, "success");
/// assert_eq!(admin.calls().len(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct StubSiteReplicationAdmin {
    responses: Mutex<Responses>,
    calls: Mutex<Vec<SiteReplicationCall>>,
}

impl StubSiteReplicationAdmin {
    /// A stub with nothing registered; every call fails with `NotConfigured`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the info returned by `get_site_replication_info`.
    pub fn with_info(self, info: SiteReplicationInfo) -> Self {
        self.responses.lock().info = Some(Ok(info));
        self
    }

    /// Register the status returned by `add_site_replication_info`.
    pub fn with_add_status(self, status: ReplicateAddStatus) -> Self {
        self.responses.lock().add = Some(Ok(status));
        self
    }

    /// Register the status returned by `edit_site_replication_info`.
    pub fn with_edit_status(self, status: ReplicateEditStatus) -> Self {
        self.responses.lock().edit = Some(Ok(status));
        self
    }

    /// Register the status returned by `delete_site_replication_info`.
    pub fn with_remove_status(self, status: ReplicateRemoveStatus) -> Self {
        self.responses.lock().remove = Some(Ok(status));
        self
    }

    /// Make one operation fail with `error`.
    pub fn with_failure(self, op: SiteReplicationOp, error: AdminError) -> Self {
        {
            let mut responses = self.responses.lock();
            match op {
                SiteReplicationOp::Info => responses.info = Some(Err(error)),
                SiteReplicationOp::Add => responses.add = Some(Err(error)),
                SiteReplicationOp::Edit => responses.edit = Some(Err(error)),
                SiteReplicationOp::Remove => responses.remove = Some(Err(error)),
            }
        }
        self
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> Vec<SiteReplicationCall> {
        self.calls.lock().clone()
    }

    /// Number of calls received for one operation.
    pub fn call_count(&self, op: SiteReplicationOp) -> usize {
        self.calls.lock().iter().filter(|c| c.op() == op).count()
    }

    fn record(&self, call: SiteReplicationCall) {
        tracing::trace!(op = call.op().as_str(), "stub site replication call");
        self.calls.lock().push(call);
    }
}

fn registered<T: Clone>(
    slot: &Option<AdminResult<T>>,
    op: SiteReplicationOp,
) -> AdminResult<T> {
    slot.clone().unwrap_or(Err(AdminError::NotConfigured(op)))
}

#[async_trait]
impl SiteReplicationAdmin for StubSiteReplicationAdmin {
    async fn get_site_replication_info(&self) -> AdminResult<SiteReplicationInfo> {
        self.record(SiteReplicationCall::Info);
        registered(&self.responses.lock().info, SiteReplicationOp::Info)
    }

    async fn add_site_replication_info(
        &self,
        sites: Vec<PeerSite>,
    ) -> AdminResult<ReplicateAddStatus> {
        self.record(SiteReplicationCall::Add(sites));
        registered(&self.responses.lock().add, SiteReplicationOp::Add)
    }

    async fn edit_site_replication_info(&self, site: PeerInfo) -> AdminResult<ReplicateEditStatus> {
        self.record(SiteReplicationCall::Edit(site));
        registered(&self.responses.lock().edit, SiteReplicationOp::Edit)
    }

    async fn delete_site_replication_info(
        &self,
        remove_req: SrRemoveReq,
    ) -> AdminResult<ReplicateRemoveStatus> {
        self.record(SiteReplicationCall::Remove(remove_req));
        registered(&self.responses.lock().remove, SiteReplicationOp::Remove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_operations_fail() {
        let admin = StubSiteReplicationAdmin::new();

        assert_eq!(
            admin.get_site_replication_info().await,
            Err(AdminError::NotConfigured(SiteReplicationOp::Info))
        );
        assert_eq!(
            admin.add_site_replication_info(Vec::new()).await,
            Err(AdminError::NotConfigured(SiteReplicationOp::Add))
        );
        assert_eq!(
            admin.edit_site_replication_info(PeerInfo::default()).await,
            Err(AdminError::NotConfigured(SiteReplicationOp::Edit))
        );
        assert_eq!(
            admin.delete_site_replication_info(SrRemoveReq::all()).await,
            Err(AdminError::NotConfigured(SiteReplicationOp::Remove))
        );
        assert_eq!(admin.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_failure_only_affects_its_operation() {
        let admin = StubSiteReplicationAdmin::new()
            .with_edit_status(ReplicateEditStatus::success())
            .with_failure(SiteReplicationOp::Add, AdminError::upstream(400, "bad peer"));

        assert_eq!(
            admin.add_site_replication_info(Vec::new()).await,
            Err(AdminError::upstream(400, "bad peer"))
        );
        assert_eq!(
            admin.edit_site_replication_info(PeerInfo::default()).await,
            Ok(ReplicateEditStatus::success())
        );
    }

    #[tokio::test]
    async fn test_failure_replaces_registered_response() {
        let admin = StubSiteReplicationAdmin::new()
            .with_info(SiteReplicationInfo::default())
            .with_failure(SiteReplicationOp::Info, AdminError::Unavailable("down".into()));

        assert!(matches!(
            admin.get_site_replication_info().await,
            Err(AdminError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_same_response_on_every_call() {
        let admin = StubSiteReplicationAdmin::new().with_remove_status(ReplicateRemoveStatus::success());

        for _ in 0..3 {
            let status = admin
                .delete_site_replication_info(SrRemoveReq::all())
                .await
                .unwrap();
            assert_eq!(status, ReplicateRemoveStatus::success());
        }
        assert_eq!(admin.call_count(SiteReplicationOp::Remove), 3);
        assert_eq!(admin.call_count(SiteReplicationOp::Info), 0);
    }

    #[test]
    fn test_call_op_mapping() {
        assert_eq!(SiteReplicationCall::Info.op(), SiteReplicationOp::Info);
        assert_eq!(SiteReplicationCall::Add(vec![]).op(), SiteReplicationOp::Add);
        assert_eq!(
            SiteReplicationCall::Edit(PeerInfo::default()).op(),
            SiteReplicationOp::Edit
        );
        assert_eq!(
            SiteReplicationCall::Remove(SrRemoveReq::all()).op(),
            SiteReplicationOp::Remove
        );
    }
}
