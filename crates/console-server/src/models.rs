//! Request and response bodies of the console site replication API.

use console_admin::{
    PeerInfo, PeerSite, ReplicateAddStatus, ReplicateEditStatus, ReplicateRemoveStatus,
    SiteReplicationInfo, SrRemoveReq,
};
use console_common_secret::SecretString;
use serde::{Deserialize, Serialize};

/// A peer site as listed by the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerInfoResponse {
    pub name: String,
    pub endpoint: String,
    #[serde(rename = "deploymentID")]
    pub deployment_id: String,
}

impl From<PeerInfo> for PeerInfoResponse {
    fn from(peer: PeerInfo) -> Self {
        Self {
            name: peer.name,
            endpoint: peer.endpoint,
            deployment_id: peer.deployment_id,
        }
    }
}

/// Current site replication configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReplicationInfoResponse {
    pub enabled: bool,
    pub name: String,
    pub sites: Vec<PeerInfoResponse>,
    pub service_account_access_key: String,
}

impl From<SiteReplicationInfo> for SiteReplicationInfoResponse {
    fn from(info: SiteReplicationInfo) -> Self {
        let sites = if info.enabled {
            info.sites.into_iter().map(PeerInfoResponse::from).collect()
        } else {
            Vec::new()
        };

        Self {
            enabled: info.enabled,
            name: info.name,
            sites,
            service_account_access_key: info.service_account_access_key,
        }
    }
}

/// A site to join to the replication group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerSiteRequest {
    #[serde(default)]
    pub name: String,
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: SecretString,
}

impl From<PeerSiteRequest> for PeerSite {
    fn from(req: PeerSiteRequest) -> Self {
        PeerSite {
            name: req.name,
            endpoint: req.endpoint,
            access_key: req.access_key,
            secret_key: req.secret_key,
        }
    }
}

/// Outcome of adding peer sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReplicationAddResponse {
    pub success: bool,
    pub status: String,
    pub error_detail: String,
    pub initial_sync_error_message: String,
}

impl From<ReplicateAddStatus> for SiteReplicationAddResponse {
    fn from(status: ReplicateAddStatus) -> Self {
        Self {
            success: status.success,
            status: status.status,
            error_detail: status.err_detail,
            initial_sync_error_message: status.initial_sync_error_message,
        }
    }
}

/// Changes to one peer site, addressed by deployment id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PeerInfoEditRequest {
    #[serde(rename = "deploymentID")]
    pub deployment_id: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub name: String,
}

impl From<PeerInfoEditRequest> for PeerInfo {
    fn from(req: PeerInfoEditRequest) -> Self {
        PeerInfo {
            endpoint: req.endpoint,
            name: req.name,
            deployment_id: req.deployment_id,
        }
    }
}

/// Outcome of editing a peer site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerSiteEditResponse {
    pub success: bool,
    pub status: String,
    pub error_detail: String,
}

impl From<ReplicateEditStatus> for PeerSiteEditResponse {
    fn from(status: ReplicateEditStatus) -> Self {
        Self {
            success: status.success,
            status: status.status,
            error_detail: status.err_detail,
        }
    }
}

/// Sites to drop from replication; `all` drops every site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PeerSiteRemoveRequest {
    #[serde(default)]
    pub all: bool,
    #[serde(default)]
    pub sites: Vec<String>,
}

impl From<PeerSiteRemoveRequest> for SrRemoveReq {
    fn from(req: PeerSiteRemoveRequest) -> Self {
        SrRemoveReq {
            site_names: req.sites,
            remove_all: req.all,
        }
    }
}

/// Outcome of removing peer sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerSiteRemoveResponse {
    pub status: String,
    pub error_detail: String,
}

impl From<ReplicateRemoveStatus> for PeerSiteRemoveResponse {
    fn from(status: ReplicateRemoveStatus) -> Self {
        Self {
            status: status.status,
            error_detail: status.err_detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_disabled_info_hides_sites() {
        let info = SiteReplicationInfo {
            enabled: false,
            name: "site1".into(),
            sites: vec![PeerInfo {
                endpoint: "http://localhost:9001".into(),
                name: "site2".into(),
                deployment_id: "123456".into(),
            }],
            service_account_access_key: String::new(),
        };

        let response = SiteReplicationInfoResponse::from(info);
        assert!(!response.enabled);
        assert!(response.sites.is_empty());
    }

    #[test]
    fn test_info_response_json() {
        let response = SiteReplicationInfoResponse {
            enabled: true,
            name: "site1".into(),
            sites: vec![PeerInfoResponse {
                name: "site1".into(),
                endpoint: "http://localhost:9000".into(),
                deployment_id: "12345".into(),
            }],
            service_account_access_key: "test-key".into(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["serviceAccountAccessKey"], "test-key");
        assert_eq!(value["sites"][0]["deploymentID"], "12345");
    }

    #[test]
    fn test_peer_site_request_from_json() {
        let req: PeerSiteRequest = serde_json::from_value(json!({
            "name": "site2",
            "endpoint": "http://localhost:9001",
            "accessKey": "test",
            "secretKey": "s3cr3t"
        }))
        .unwrap();

        let site = PeerSite::from(req);
        assert_eq!(site.endpoint, "http://localhost:9001");
        assert_eq!(site.secret_key.expose(), "s3cr3t");
        assert!(!format!("{:?}", site).contains("s3cr3t"));
    }

    #[test]
    fn test_remove_request_defaults() {
        let req: PeerSiteRemoveRequest = serde_json::from_value(json!({})).unwrap();
        let req = SrRemoveReq::from(req);
        assert!(!req.remove_all);
        assert!(req.site_names.is_empty());
    }

    #[test]
    fn test_add_response_carries_details() {
        let status = ReplicateAddStatus {
            success: false,
            status: "failed".into(),
            err_detail: "unreachable".into(),
            initial_sync_error_message: "bucket sync failed".into(),
        };

        let value = serde_json::to_value(SiteReplicationAddResponse::from(status)).unwrap();
        assert_eq!(value["errorDetail"], "unreachable");
        assert_eq!(value["initialSyncErrorMessage"], "bucket sync failed");
    }
}
