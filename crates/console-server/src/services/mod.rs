//! Services behind the console handlers.

pub mod site_replication;

pub use site_replication::SiteReplicationService;
