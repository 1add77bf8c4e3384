//! Site replication administration for the console.
//!
//! The console never talks to the admin service directly. Every site
//! replication call goes through the [`SiteReplicationAdmin`] port. The
//! embedding application supplies the admin client; tests use
//! [`StubSiteReplicationAdmin`] or the mockall-generated
//! `MockSiteReplicationAdmin` (enabled by the `mock` feature).

#![warn(missing_docs)]

pub mod error;
pub mod port;
pub mod stub;
pub mod types;

pub use error::{AdminError, AdminResult, SiteReplicationOp};
#[cfg(any(test, feature = "mock"))]
pub use port::MockSiteReplicationAdmin;
pub use port::SiteReplicationAdmin;
pub use stub::{SiteReplicationCall, StubSiteReplicationAdmin};
pub use types::*;
