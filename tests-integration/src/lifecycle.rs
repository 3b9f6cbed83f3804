//! Integration tests for server start/stop and concurrent clients

use improv_core::MemStore;

use crate::{base_url, spawn_server};

#[tokio::test]
async fn test_health_check() {
    let handle = spawn_server(MemStore::new()).await;
    let url = format!("{}/health", base_url(&handle));

    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");

    handle.stop().await;
}

#[tokio::test]
async fn test_multiple_concurrent_clients() {
    let handle = spawn_server(MemStore::seeded()).await;
    let url = format!("{}/api/prompts/random", base_url(&handle));

    let requests: Vec<_> = (0..16)
        .map(|_| {
            let url = url.clone();
            tokio::spawn(async move { reqwest::get(&url).await.map(|r| r.status()) })
        })
        .collect();

    for request in requests {
        let status = request.await.unwrap().unwrap();
        assert_eq!(status, 200);
    }

    handle.stop().await;
}

#[tokio::test]
async fn test_requests_fail_after_stop() {
    let handle = spawn_server(MemStore::seeded()).await;
    let url = format!("{}/api/prompts", base_url(&handle));

    assert!(reqwest::get(&url).await.is_ok());
    handle.stop().await;

    assert!(reqwest::get(&url).await.is_err());
}
