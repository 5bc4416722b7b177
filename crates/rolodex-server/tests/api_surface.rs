// SPDX-License-Identifier: Apache-2.0
//! Status-code contract of the JSON API surface.

mod support;

use support::{delete, get, json_body, seed_contact, send_json, status_of};

#[tokio::test]
async fn list_starts_empty() {
    let addr = support::spawn_app().await;
    let response = get(addr, "/api/contacts").await;
    assert_eq!(status_of(&response), 200);
    assert_eq!(json_body(&response), serde_json::json!([]));
}

#[tokio::test]
async fn create_returns_201_with_assigned_id() {
    let addr = support::spawn_app().await;
    let response = send_json(
        addr,
        "POST",
        "/api/contacts",
        r#"{"name":"API User","phone":"5555555555","email":"api@example.com","type":"work"}"#,
    )
    .await;
    assert_eq!(status_of(&response), 201);
    let created = json_body(&response);
    assert_eq!(created["name"], "API User");
    assert_eq!(created["type"], "work");
    assert!(created["id"].as_i64().expect("assigned id") >= 1);
}

#[tokio::test]
async fn create_without_name_returns_400_and_persists_nothing() {
    let addr = support::spawn_app().await;
    let response = send_json(
        addr,
        "POST",
        "/api/contacts",
        r#"{"phone":"5555555555","email":"api@example.com"}"#,
    )
    .await;
    assert_eq!(status_of(&response), 400);
    let err = json_body(&response);
    assert_eq!(err["error"]["code"], "validation_failed");

    let listing = get(addr, "/api/contacts").await;
    assert_eq!(json_body(&listing), serde_json::json!([]));
}

#[tokio::test]
async fn create_with_only_name_defaults_remaining_fields() {
    let addr = support::spawn_app().await;
    let response = send_json(addr, "POST", "/api/contacts", r#"{"name":"Solo"}"#).await;
    assert_eq!(status_of(&response), 201);
    let created = json_body(&response);
    assert_eq!(created["phone"], "");
    assert_eq!(created["email"], "");
    assert_eq!(created["type"], "");
}

#[tokio::test]
async fn get_returns_created_record() {
    let addr = support::spawn_app().await;
    let id = seed_contact(addr, "John Doe").await;
    let response = get(addr, &format!("/api/contacts/{id}")).await;
    assert_eq!(status_of(&response), 200);
    let contact = json_body(&response);
    assert_eq!(contact["name"], "John Doe");
    assert_eq!(contact["id"], id);
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let addr = support::spawn_app().await;
    let response = get(addr, "/api/contacts/999").await;
    assert_eq!(status_of(&response), 404);
    assert_eq!(json_body(&response)["error"]["code"], "contact_not_found");
}

#[tokio::test]
async fn update_replaces_every_field() {
    let addr = support::spawn_app().await;
    let id = seed_contact(addr, "John Doe").await;
    let response = send_json(
        addr,
        "PUT",
        &format!("/api/contacts/{id}"),
        r#"{"name":"Updated API User","phone":"5555551234","email":"updated_api@example.com","type":"personal"}"#,
    )
    .await;
    assert_eq!(status_of(&response), 200);
    let updated = json_body(&response);
    assert_eq!(updated["name"], "Updated API User");
    assert_eq!(updated["phone"], "5555551234");
    assert_eq!(updated["email"], "updated_api@example.com");
    assert_eq!(updated["type"], "personal");

    let fetched = json_body(&get(addr, &format!("/api/contacts/{id}")).await);
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_without_name_returns_400_and_leaves_record_alone() {
    let addr = support::spawn_app().await;
    let id = seed_contact(addr, "John Doe").await;
    let response = send_json(
        addr,
        "PUT",
        &format!("/api/contacts/{id}"),
        r#"{"name":"","phone":"0000000000"}"#,
    )
    .await;
    assert_eq!(status_of(&response), 400);

    let fetched = json_body(&get(addr, &format!("/api/contacts/{id}")).await);
    assert_eq!(fetched["name"], "John Doe");
    assert_eq!(fetched["phone"], "1234567890");
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let addr = support::spawn_app().await;
    let response = send_json(
        addr,
        "PUT",
        "/api/contacts/999",
        r#"{"name":"Nobody"}"#,
    )
    .await;
    assert_eq!(status_of(&response), 404);
}

#[tokio::test]
async fn delete_returns_204_then_get_returns_404() {
    let addr = support::spawn_app().await;
    let id = seed_contact(addr, "John Doe").await;

    let response = delete(addr, &format!("/api/contacts/{id}")).await;
    assert_eq!(status_of(&response), 204);
    assert_eq!(support::body_of(&response), "");

    let fetched = get(addr, &format!("/api/contacts/{id}")).await;
    assert_eq!(status_of(&fetched), 404);
}

#[tokio::test]
async fn delete_unknown_id_returns_404() {
    let addr = support::spawn_app().await;
    let response = delete(addr, "/api/contacts/999").await;
    assert_eq!(status_of(&response), 404);
}

#[tokio::test]
async fn list_reflects_creations_in_insertion_order() {
    let addr = support::spawn_app().await;
    seed_contact(addr, "First").await;
    seed_contact(addr, "Second").await;

    let listing = json_body(&get(addr, "/api/contacts").await);
    let names: Vec<&str> = listing
        .as_array()
        .expect("array body")
        .iter()
        .map(|c| c["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}
