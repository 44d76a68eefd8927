//! Mock API helpers shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};

use lds_sync_api::{ApiConfig, ApiSession, Credentials, SuiteConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MODEL: &str = "DS100";
pub const USERNAME: &str = "qa@example.com";
pub const PASSWORD: &str = "hunter2";
pub const TOKEN: &str = "abc";
pub const BRAND: &str = "acct42";

/// Fake domain routed to the mock server through DNS overrides
pub const DOMAIN: &str = "een.test";

/// Config pointing every subdomain used in tests at `server`
pub fn config_for(server: &MockServer) -> SuiteConfig {
    config_for_addr(*server.address())
}

/// Config routing every subdomain used in tests to `addr`
pub fn config_for_addr(addr: SocketAddr) -> SuiteConfig {
    let mut resolve = HashMap::new();
    for sub in ["login", BRAND, "other"] {
        resolve.insert(format!("{}.{}", sub, DOMAIN), addr);
    }

    let mut models = HashMap::new();
    models.insert(
        MODEL.to_string(),
        Credentials {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        },
    );

    SuiteConfig {
        models,
        api: ApiConfig {
            protocol: "http://".to_string(),
            base_domain: format!(".{}:{}", DOMAIN, addr.port()),
            timeout_secs: 5,
            resolve,
            ..Default::default()
        },
    }
}

/// An address nothing is listening on
pub fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr")
}

pub fn session_for(config: &SuiteConfig) -> ApiSession {
    ApiSession::new(&config.api).expect("build session")
}

/// Host header expected for a subdomain on `server`
pub fn host(server: &MockServer, sub: &str) -> String {
    format!("{}.{}:{}", sub, DOMAIN, server.address().port())
}

/// Mount a successful authenticate + authorize pair
pub async fn mount_login(server: &MockServer, brand: &str) {
    Mock::given(method("POST"))
        .and(path("/g/aaa/authenticate"))
        .and(query_param("username", USERNAME))
        .and(query_param("password", PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": TOKEN })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/g/aaa/authorize"))
        .and(query_param("token", TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "active_brand_subdomain": brand })),
        )
        .expect(1)
        .mount(server)
        .await;
}

pub fn layout_rows(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| json!([format!("layout{}", i), format!("Layout {}", i), []]))
            .collect(),
    )
}

pub fn device_row(id: &str, kind: &str) -> Value {
    json!(["00001234", id, format!("{} name", id), kind, [], "ATTD"])
}

pub fn rtsp_body(id: &str) -> Value {
    json!({
        "preview_url": format!("rtsp://{}/preview", id),
        "video_url": format!("rtsp://{}/video", id)
    })
}
