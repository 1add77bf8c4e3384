//! The literal site replication records shared by the test suites.

use console_admin::{
    PeerInfo, PeerSite, ReplicateAddStatus, ReplicateEditStatus, ReplicateRemoveStatus,
    SiteReplicationInfo, SrRemoveReq, StubSiteReplicationAdmin,
};
use console_common_secret::SecretString;

fn peer(endpoint: &str, name: &str, deployment_id: &str) -> PeerInfo {
    PeerInfo {
        endpoint: endpoint.to_string(),
        name: name.to_string(),
        deployment_id: deployment_id.to_string(),
    }
}

/// Enabled replication between `site1` and `site2`.
pub fn site_replication_info() -> SiteReplicationInfo {
    SiteReplicationInfo {
        enabled: true,
        name: "site1".to_string(),
        sites: vec![
            peer("http://localhost:9000", "site1", "12345"),
            peer("http://localhost:9001", "site2", "123456"),
        ],
        service_account_access_key: "test-key".to_string(),
    }
}

/// `site1` and `site2`, both with access and secret key `test`.
pub fn peer_sites() -> Vec<PeerSite> {
    vec![
        PeerSite {
            name: "site1".to_string(),
            endpoint: "http://localhost:9000".to_string(),
            access_key: "test".to_string(),
            secret_key: SecretString::from("test"),
        },
        PeerSite {
            name: "site2".to_string(),
            endpoint: "http://localhost:9001".to_string(),
            access_key: "test".to_string(),
            secret_key: SecretString::from("test"),
        },
    ]
}

/// Edit request addressing deployment `12345` with no name or endpoint.
pub fn edit_peer_info() -> PeerInfo {
    peer("", "", "12345")
}

/// Removal of site `test1`.
pub fn remove_request() -> SrRemoveReq {
    SrRemoveReq {
        site_names: vec!["test1".to_string()],
        remove_all: false,
    }
}

pub fn add_status() -> ReplicateAddStatus {
    ReplicateAddStatus {
        success: true,
        status: "success".to_string(),
        err_detail: String::new(),
        initial_sync_error_message: String::new(),
    }
}

pub fn edit_status() -> ReplicateEditStatus {
    ReplicateEditStatus {
        success: true,
        status: "success".to_string(),
        err_detail: String::new(),
    }
}

pub fn remove_status() -> ReplicateRemoveStatus {
    ReplicateRemoveStatus {
        status: "success".to_string(),
        err_detail: String::new(),
    }
}

/// A stub answering every operation with the fixtures above.
pub fn configured_stub() -> StubSiteReplicationAdmin {
    StubSiteReplicationAdmin::new()
        .with_info(site_replication_info())
        .with_add_status(add_status())
        .with_edit_status(edit_status())
        .with_remove_status(remove_status())
}
