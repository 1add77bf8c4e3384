//! Request handlers.

pub mod site_replication;
