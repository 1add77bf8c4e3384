//! Site replication value records.
//!
//! Field names on the wire follow the admin service's JSON (`deploymentID`,
//! `serviceAccountAccessKey`, `errorDetail`, ...). Empty detail strings are
//! left out when serializing.

use console_common_secret::SecretString;
use serde::{Deserialize, Serialize};

/// Status string reported by the admin service for a successful call.
pub const REPLICATE_SUCCESS: &str = "success";

/// Current site replication configuration of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReplicationInfo {
    /// Whether site replication is configured.
    pub enabled: bool,
    /// Name of the local site.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Participating sites, in the order the admin service reports them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<PeerInfo>,
    /// Access key of the service account used for replication.
    #[serde(default)]
    pub service_account_access_key: String,
}

/// Descriptor of one site taking part in replication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerInfo {
    /// Endpoint URL of the site.
    #[serde(default)]
    pub endpoint: String,
    /// Site name.
    #[serde(default)]
    pub name: String,
    /// Deployment identifier of the site.
    #[serde(rename = "deploymentID", default)]
    pub deployment_id: String,
}

/// A site to add to replication, with the credentials to reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerSite {
    /// Site name.
    #[serde(default)]
    pub name: String,
    /// Endpoint URL of the site.
    #[serde(rename = "endpoints", default)]
    pub endpoint: String,
    /// Admin access key for the site.
    #[serde(default)]
    pub access_key: String,
    /// Admin secret key for the site. Written in clear on the wire; `Debug`
    /// stays redacted.
    #[serde(default, serialize_with = "console_common_secret::serialize_exposed")]
    pub secret_key: SecretString,
}

/// Outcome of adding sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicateAddStatus {
    /// Whether the sites were added.
    pub success: bool,
    /// Status reported by the admin service.
    #[serde(default)]
    pub status: String,
    /// Error detail, empty on success.
    #[serde(rename = "errorDetail", default, skip_serializing_if = "String::is_empty")]
    pub err_detail: String,
    /// Error raised while syncing existing data to the new sites.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub initial_sync_error_message: String,
}

impl ReplicateAddStatus {
    /// A successful add with no error details.
    pub fn success() -> Self {
        Self {
            success: true,
            status: REPLICATE_SUCCESS.to_string(),
            ..Self::default()
        }
    }
}

/// Outcome of editing a site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicateEditStatus {
    /// Whether the site was updated.
    pub success: bool,
    /// Status reported by the admin service.
    #[serde(default)]
    pub status: String,
    /// Error detail, empty on success.
    #[serde(rename = "errorDetail", default, skip_serializing_if = "String::is_empty")]
    pub err_detail: String,
}

impl ReplicateEditStatus {
    /// A successful edit with no error detail.
    pub fn success() -> Self {
        Self {
            success: true,
            status: REPLICATE_SUCCESS.to_string(),
            ..Self::default()
        }
    }
}

/// Outcome of removing sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicateRemoveStatus {
    /// Status reported by the admin service.
    #[serde(default)]
    pub status: String,
    /// Error detail, empty on success.
    #[serde(rename = "errorDetail", default, skip_serializing_if = "String::is_empty")]
    pub err_detail: String,
}

impl ReplicateRemoveStatus {
    /// A successful removal with no error detail.
    pub fn success() -> Self {
        Self {
            status: REPLICATE_SUCCESS.to_string(),
            ..Self::default()
        }
    }
}

/// Which sites to remove from replication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrRemoveReq {
    /// Names of the sites to remove.
    #[serde(rename = "sites", default)]
    pub site_names: Vec<String>,
    /// Remove every site and disable replication.
    #[serde(rename = "all", default)]
    pub remove_all: bool,
}

impl SrRemoveReq {
    /// Remove the named sites.
    pub fn sites<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            site_names: names.into_iter().map(Into::into).collect(),
            remove_all: false,
        }
    }

    /// Remove all sites.
    pub fn all() -> Self {
        Self {
            site_names: Vec::new(),
            remove_all: true,
        }
    }
}
