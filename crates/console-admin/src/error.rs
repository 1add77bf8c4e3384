//! Errors returned through the site replication port.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type for site replication calls.
pub type AdminResult<T> = Result<T, AdminError>;

/// The four site replication operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteReplicationOp {
    /// Retrieve the current site replication info.
    Info,
    /// Add peer sites.
    Add,
    /// Edit one peer site.
    Edit,
    /// Remove some or all peer sites.
    Remove,
}

impl SiteReplicationOp {
    /// All operations, in declaration order.
    pub const ALL: [SiteReplicationOp; 4] = [Self::Info, Self::Add, Self::Edit, Self::Remove];

    /// Short name used in spans and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for SiteReplicationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "getSiteReplicationInfo",
            Self::Add => "addSiteReplicationInfo",
            Self::Edit => "editSiteReplicationInfo",
            Self::Remove => "deleteSiteReplicationInfo",
        };
        f.write_str(name)
    }
}

/// Site replication call failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// A test double was called for an operation it has no response for.
    #[error("no response registered for {0}")]
    NotConfigured(SiteReplicationOp),

    /// The request was rejected before reaching the admin service.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The admin service answered with an error.
    #[error("admin service returned {status}: {message}")]
    Upstream {
        /// HTTP status reported by the admin service.
        status: u16,
        /// Error message reported by the admin service.
        message: String,
    },

    /// The admin service could not be reached.
    #[error("admin service unavailable: {0}")]
    Unavailable(String),

    /// The call did not complete before its deadline.
    #[error("admin call timed out after {0:?}")]
    Timeout(Duration),
}

impl AdminError {
    /// Create an invalid request error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an upstream error.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_display_names() {
        assert_eq!(SiteReplicationOp::Info.to_string(), "getSiteReplicationInfo");
        assert_eq!(SiteReplicationOp::Add.to_string(), "addSiteReplicationInfo");
        assert_eq!(SiteReplicationOp::Edit.to_string(), "editSiteReplicationInfo");
        assert_eq!(SiteReplicationOp::Remove.to_string(), "deleteSiteReplicationInfo");
    }

    #[test]
    fn test_op_short_names_unique() {
        let names: std::collections::HashSet<_> =
            SiteReplicationOp::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_error_display() {
        let err = AdminError::NotConfigured(SiteReplicationOp::Edit);
        assert_eq!(err.to_string(), "no response registered for editSiteReplicationInfo");

        let err = AdminError::upstream(400, "site already added");
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("site already added"));

        let err = AdminError::Timeout(Duration::from_secs(10));
        assert!(err.to_string().contains("10s"));
    }
}
