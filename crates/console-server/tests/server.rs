//! End-to-end test over a real socket.

use console_common_config::ConsoleConfig;
use console_server::Server;
use console_test_utils::fixtures;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_serve_until_shutdown() {
    console_test_utils::init_test_tracing();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let server = Server::new(ConsoleConfig::default(), Arc::new(fixtures::configured_stub()));
    let handle = tokio::spawn(server.serve(listener, async {
        let _ = rx.await;
    }));

    let body: serde_json::Value = reqwest::get(format!(
        "http://{}/api/v1/admin/site-replication",
        addr
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();

    assert_eq!(body["name"], "site1");
    assert_eq!(body["sites"].as_array().map(Vec::len), Some(2));

    tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
