//! Panel transport: one cookie-holding HTTP session.
//!
//! Everything the panel does goes through a single backend URL, driven by an
//! `action` query/form parameter. This module owns the `reqwest::Client`
//! (and with it the session cookie jar) and maps transport failures onto
//! [`GratisDnsError`]; it knows nothing about HTML or record semantics.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;

use crate::error::{GratisDnsError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Connect timeout (seconds).
const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Full-request timeout (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cookie-holding session against the panel's backend URL.
pub(crate) struct Panel {
    client: Client,
    backend_url: String,
}

impl Panel {
    pub(crate) fn new(backend_url: String) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GratisDnsError::NetworkError {
                detail: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            backend_url,
        })
    }

    /// Issues a GET against the backend URL and returns the page body.
    pub(crate) async fn get(&self, query: &[(&str, &str)]) -> Result<String> {
        log::debug!("GET {} {query:?}", self.backend_url);

        let response = self
            .client
            .get(&self.backend_url)
            .query(query)
            .send()
            .await
            .map_err(map_send_error)?;

        self.read_body(response).await
    }

    /// POSTs an `application/x-www-form-urlencoded` body against the backend
    /// URL and returns the response body.
    pub(crate) async fn post_form<T: Serialize + ?Sized>(&self, form: &T) -> Result<String> {
        log::debug!("POST {}", self.backend_url);

        let response = self
            .client
            .post(&self.backend_url)
            .form(form)
            .send()
            .await
            .map_err(map_send_error)?;

        self.read_body(response).await
    }

    /// Maps the response status and reads the body text.
    ///
    /// Redirect statuses count as success: the panel answers some form
    /// submissions with a plain 302 and no body worth following.
    async fn read_body(&self, response: Response) -> Result<String> {
        let status = response.status();
        log::debug!("Response Status: {status}");

        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Panel server error (HTTP {status})");
            return Err(GratisDnsError::NetworkError {
                detail: format!("HTTP {}: {}", status.as_u16(), truncate_for_log(&body)),
            });
        }
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(GratisDnsError::HttpStatus {
                status: status.as_u16(),
                detail: truncate_for_log(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GratisDnsError::NetworkError {
                detail: format!("failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));
        Ok(body)
    }
}

fn map_send_error(e: reqwest::Error) -> GratisDnsError {
    if e.is_timeout() {
        GratisDnsError::Timeout {
            detail: e.to_string(),
        }
    } else {
        GratisDnsError::NetworkError {
            detail: e.to_string(),
        }
    }
}
