// SPDX-License-Identifier: Apache-2.0
//! Shared harness for the end-to-end tests: boot the router on an ephemeral
//! port with an in-memory store, then speak HTTP/1.1 over a raw TCP stream.
#![allow(dead_code)]

use rolodex_server::{build_router, ApiConfig, AppState};
use rolodex_store::ContactStore;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub async fn spawn_app() -> SocketAddr {
    spawn_app_with_config(ApiConfig::default()).await
}

pub async fn spawn_app_with_config(api: ApiConfig) -> SocketAddr {
    let store = ContactStore::open_in_memory().expect("open in-memory store");
    let app = build_router(AppState::with_config(store, api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve app");
    });
    addr
}

async fn send_raw(addr: SocketAddr, raw: String) -> String {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    stream.write_all(raw.as_bytes()).await.expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    response
}

pub async fn get(addr: SocketAddr, path: &str) -> String {
    send_raw(
        addr,
        format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"),
    )
    .await
}

pub async fn get_with_header(addr: SocketAddr, path: &str, name: &str, value: &str) -> String {
    send_raw(
        addr,
        format!(
            "GET {path} HTTP/1.1\r\nHost: {addr}\r\n{name}: {value}\r\nConnection: close\r\n\r\n"
        ),
    )
    .await
}

pub async fn post_form(addr: SocketAddr, path: &str, body: &str) -> String {
    send_raw(
        addr,
        format!(
            "POST {path} HTTP/1.1\r\nHost: {addr}\r\n\
Content-Type: application/x-www-form-urlencoded\r\n\
Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ),
    )
    .await
}

pub async fn send_json(addr: SocketAddr, method: &str, path: &str, body: &str) -> String {
    send_raw(
        addr,
        format!(
            "{method} {path} HTTP/1.1\r\nHost: {addr}\r\n\
Content-Type: application/json\r\n\
Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ),
    )
    .await
}

pub async fn delete(addr: SocketAddr, path: &str) -> String {
    send_raw(
        addr,
        format!("DELETE {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"),
    )
    .await
}

pub fn status_of(response: &str) -> u16 {
    response
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status code in response line")
}

pub fn body_of(response: &str) -> &str {
    response
        .split_once("\r\n\r\n")
        .map(|(_, body)| body)
        .unwrap_or("")
}

pub fn header_of(response: &str, name: &str) -> Option<String> {
    let head = response.split_once("\r\n\r\n").map_or(response, |(h, _)| h);
    let wanted = name.to_ascii_lowercase();
    for line in head.lines().skip(1) {
        if let Some((key, value)) = line.split_once(':') {
            if key.trim().to_ascii_lowercase() == wanted {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

pub fn json_body(response: &str) -> serde_json::Value {
    serde_json::from_str(body_of(response)).expect("json body")
}

/// Create a contact through the API and return its assigned id.
pub async fn seed_contact(addr: SocketAddr, name: &str) -> i64 {
    let body = format!(
        r#"{{"name":"{name}","phone":"1234567890","email":"seed@example.com","type":"Personal"}}"#
    );
    let response = send_json(addr, "POST", "/api/contacts", &body).await;
    assert_eq!(status_of(&response), 201, "seed contact: {response}");
    json_body(&response)["id"].as_i64().expect("seeded id")
}
