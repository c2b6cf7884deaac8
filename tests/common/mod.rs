//! Shared helpers for the integration test suite.

#![allow(dead_code)]

use std::collections::HashMap;

use gratisdns::GratisDns;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PRIMARY_DOMAINS: &str = include_str!("../fixtures/primary_domains.html");
pub const SECONDARY_DOMAINS: &str = include_str!("../fixtures/secondary_domains.html");
pub const PRIMARY_DOMAIN_DETAILS: &str = include_str!("../fixtures/primary_domain_details.html");
pub const LOGIN_REJECTED: &str = include_str!("../fixtures/login_rejected.html");

/// Skip a test when required environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Accepts the login POST and returns an authenticated client against the
/// mock panel.
pub async fn login(server: &MockServer) -> GratisDns {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("action=logmein"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    GratisDns::login_with_backend(server.uri(), "user", "password")
        .await
        .expect("login against the mock panel should succeed")
}

/// Serves `html` for every GET against the mock panel.
pub async fn mount_page(server: &MockServer, html: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Accepts record-update POSTs with an empty 200.
pub async fn mount_update_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("dns_primary_record_update"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// Decodes an `application/x-www-form-urlencoded` body into a map.
pub fn form_fields(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}
