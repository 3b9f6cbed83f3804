//! Integration tests for the prompt endpoints

use improv_core::{Category, MemStore, NewPrompt, PromptStore};
use serde_json::{json, Value};

use crate::{base_url, spawn_server};

#[tokio::test]
async fn test_category_props() {
    let handle = spawn_server(MemStore::seeded()).await;
    let url = format!("{}/api/prompts/category/props", base_url(&handle));

    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), 200);

    let prompts: Vec<Value> = response.json().await.unwrap();
    assert!(!prompts.is_empty());
    assert!(prompts.iter().all(|p| p["category"] == "props"));

    handle.stop().await;
}

#[tokio::test]
async fn test_category_bogus() {
    let handle = spawn_server(MemStore::seeded()).await;
    let url = format!("{}/api/prompts/category/bogus", base_url(&handle));

    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Invalid category"}));

    handle.stop().await;
}

#[tokio::test]
async fn test_random_characters_repeatedly() {
    let handle = spawn_server(MemStore::seeded()).await;
    let url = format!("{}/api/prompts/random?category=characters", base_url(&handle));
    let client = reqwest::Client::new();

    for _ in 0..20 {
        let response = client.get(&url).send().await.unwrap();
        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["category"], "characters");
    }

    handle.stop().await;
}

#[tokio::test]
async fn test_random_empty_props_is_server_error() {
    let store = MemStore::with_prompts(vec![
        NewPrompt::new("A lone scenario", Category::Scenarios),
        NewPrompt::new("A lone character", Category::Characters),
    ]);
    let handle = spawn_server(store).await;
    let url = format!("{}/api/prompts/random?category=props", base_url(&handle));

    let response = reqwest::get(&url).await.unwrap();
    assert!(response.status().is_server_error());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Failed to fetch random prompt");

    handle.stop().await;
}

#[tokio::test]
async fn test_all_prompts_shape() {
    let store = MemStore::seeded();
    let created = store
        .create(NewPrompt::new("An accordion that only plays sea shanties", Category::Props))
        .await
        .unwrap();
    let handle = spawn_server(store).await;
    let url = format!("{}/api/prompts", base_url(&handle));

    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), 200);

    let prompts: Vec<Value> = response.json().await.unwrap();
    assert_eq!(prompts.len(), 16);

    let id = created.id.to_string();
    let matching: Vec<&Value> = prompts.iter().filter(|p| p["id"] == id.as_str()).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["specialElements"], json!([]));
    assert!(matching[0]["createdAt"].is_string());

    handle.stop().await;
}

#[tokio::test]
async fn test_unknown_route() {
    let handle = spawn_server(MemStore::seeded()).await;
    let url = format!("{}/api/nothing-here", base_url(&handle));

    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), 404);

    handle.stop().await;
}
