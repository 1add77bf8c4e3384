//! The four site replication calls, each answered by a stub registered just
//! before the call.

use console_admin::{
    AdminError, ReplicateAddStatus, ReplicateRemoveStatus, SiteReplicationAdmin,
    SiteReplicationCall, SiteReplicationOp, StubSiteReplicationAdmin,
};
use console_test_utils::{assert_err, assert_ok, fixtures};
use proptest::prelude::*;

#[tokio::test]
async fn test_get_site_replication_info() {
    let function = "getSiteReplicationInfo()";
    let admin = StubSiteReplicationAdmin::new().with_info(fixtures::site_replication_info());

    let sr_info = assert_ok!(
        admin.get_site_replication_info().await,
        "Failed on {}",
        function
    );

    assert_eq!(
        sr_info,
        fixtures::site_replication_info(),
        "Failed on {}: returned info differs",
        function
    );
    assert_eq!(admin.calls(), vec![SiteReplicationCall::Info]);
}

#[tokio::test]
async fn test_add_site_replication_info() {
    let function = "addSiteReplicationInfo()";
    let admin = StubSiteReplicationAdmin::new().with_add_status(fixtures::add_status());

    let status = assert_ok!(
        admin.add_site_replication_info(fixtures::peer_sites()).await,
        "Failed on {}",
        function
    );

    assert_eq!(
        status,
        fixtures::add_status(),
        "Failed on {}: returned status differs",
        function
    );
    assert_eq!(
        admin.calls(),
        vec![SiteReplicationCall::Add(fixtures::peer_sites())]
    );
}

#[tokio::test]
async fn test_edit_site_replication_info() {
    let function = "editSiteReplicationInfo()";
    let admin = StubSiteReplicationAdmin::new().with_edit_status(fixtures::edit_status());

    let status = assert_ok!(
        admin
            .edit_site_replication_info(fixtures::edit_peer_info())
            .await,
        "Failed on {}",
        function
    );

    assert_eq!(
        status,
        fixtures::edit_status(),
        "Failed on {}: returned status differs",
        function
    );
    assert_eq!(
        admin.calls(),
        vec![SiteReplicationCall::Edit(fixtures::edit_peer_info())]
    );
}

#[tokio::test]
async fn test_delete_site_replication_info() {
    let function = "deleteSiteReplicationInfo()";
    let admin = StubSiteReplicationAdmin::new().with_remove_status(fixtures::remove_status());

    let status = assert_ok!(
        admin
            .delete_site_replication_info(fixtures::remove_request())
            .await,
        "Failed on {}",
        function
    );

    assert_eq!(
        status,
        fixtures::remove_status(),
        "Failed on {}: returned status differs",
        function
    );
    assert_eq!(
        admin.calls(),
        vec![SiteReplicationCall::Remove(fixtures::remove_request())]
    );
}

#[tokio::test]
async fn test_configured_stub_answers_every_operation() {
    let admin = fixtures::configured_stub();

    assert_ok!(admin.get_site_replication_info().await);
    assert_ok!(admin.add_site_replication_info(fixtures::peer_sites()).await);
    assert_ok!(admin.edit_site_replication_info(fixtures::edit_peer_info()).await);
    assert_ok!(admin.delete_site_replication_info(fixtures::remove_request()).await);

    let ops: Vec<_> = admin.calls().iter().map(SiteReplicationCall::op).collect();
    assert_eq!(ops, SiteReplicationOp::ALL.to_vec());
}

#[tokio::test]
async fn test_registered_failure_is_returned() {
    let admin = StubSiteReplicationAdmin::new().with_failure(
        SiteReplicationOp::Remove,
        AdminError::upstream(404, "site test1 not found"),
    );

    let err = assert_err!(
        admin
            .delete_site_replication_info(fixtures::remove_request())
            .await
    );
    assert_eq!(err, AdminError::upstream(404, "site test1 not found"));
}

fn arb_add_status() -> impl Strategy<Value = ReplicateAddStatus> {
    (any::<bool>(), ".*", ".*", ".*").prop_map(|(success, status, err_detail, sync)| {
        ReplicateAddStatus {
            success,
            status,
            err_detail,
            initial_sync_error_message: sync,
        }
    })
}

proptest! {
    #[test]
    fn stub_returns_exactly_the_registered_status(
        add in arb_add_status(),
        remove_status in ".*",
        remove_detail in ".*",
    ) {
        let remove = ReplicateRemoveStatus { status: remove_status, err_detail: remove_detail };
        let admin = StubSiteReplicationAdmin::new()
            .with_add_status(add.clone())
            .with_remove_status(remove.clone());

        let (got_add, got_remove) = tokio_test::block_on(async {
            (
                admin.add_site_replication_info(fixtures::peer_sites()).await,
                admin.delete_site_replication_info(fixtures::remove_request()).await,
            )
        });

        prop_assert_eq!(got_add, Ok(add));
        prop_assert_eq!(got_remove, Ok(remove));
    }
}
