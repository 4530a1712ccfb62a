//! Request dispatch
//!
//! Every endpoint goes through [`PorkbunClient::dispatch`]:
//! - payload validation (`domain` field guard) and credential injection
//! - `POST {base_url}{path}` with a JSON body
//! - classification: network → HTTP status → response shape → API status

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{PorkbunError, Result};
use crate::types::SUCCESS_STATUS;
use crate::utils::log_sanitizer::truncate_for_log;
use crate::validation::{assert_valid, validate_domain};

use super::{Credentials, PorkbunClient};

/// Name used as log prefix.
const PROVIDER: &str = "porkbun";

impl PorkbunClient {
    /// Sends `payload` to `path` and decodes the success response into `T`.
    ///
    /// `path` is appended verbatim to the base URL; callers build it with
    /// [`endpoint_path`] so the embedded domain is validated first.
    pub(crate) async fn dispatch<T, B>(&self, path: &str, payload: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = self.dispatch_inner(path, payload).await;
        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("[{PROVIDER}] POST {path} failed: {e}");
            } else {
                log::error!("[{PROVIDER}] POST {path} failed: {e}");
            }
        }
        result
    }

    /// POST with a request body.
    pub(crate) async fn post<T, B>(&self, path: &str, payload: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(path, Some(payload)).await
    }

    /// POST with credentials only.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch::<T, Value>(path, None).await
    }

    async fn dispatch_inner<T, B>(&self, path: &str, payload: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = build_body(payload, &self.config.credentials)?;
        let url = format!("{}{path}", self.config.base_url);
        log::debug!("[{PROVIDER}] POST {path}");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PorkbunError::network(format!("Request to {path} failed: {e}"), e))?;

        let status = response.status();
        log::debug!("[{PROVIDER}] Response Status: {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("[{PROVIDER}] Response Body: {}", truncate_for_log(&body));
            return Err(PorkbunError::HttpError {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| PorkbunError::network(format!("Failed to read response body: {e}"), e))?;

        decode_response(&text)
    }
}

/// Builds the outgoing JSON object: payload fields, then credentials.
///
/// Credentials are inserted last and overwrite any same-named payload field.
fn build_body<B>(payload: Option<&B>, credentials: &Credentials) -> Result<Map<String, Value>>
where
    B: Serialize + ?Sized,
{
    let mut body = match payload.map(serde_json::to_value).transpose() {
        Ok(None | Some(Value::Null)) => Map::new(),
        Ok(Some(Value::Object(map))) => map,
        Ok(Some(other)) => {
            return Err(PorkbunError::ValidationError {
                field: "payload".to_string(),
                value: other,
                reason: "Payload must serialize to a JSON object".to_string(),
            });
        }
        Err(e) => {
            return Err(PorkbunError::ValidationError {
                field: "payload".to_string(),
                value: Value::Null,
                reason: format!("Payload could not be serialized: {e}"),
            });
        }
    };

    // Request structs skip `domain`; the wrappers validate it in `endpoint_path`.
    if let Some(domain) = body.get("domain") {
        guard_domain_value(domain)?;
    }

    credentials.inject(&mut body);
    Ok(body)
}

/// Rejects a payload `domain` field that is not a valid domain string.
///
/// Only reached by payloads that serialize a `domain` key. The endpoint wrappers
/// keep `domain` out of their bodies and rely on [`endpoint_path`] instead.
fn guard_domain_value(domain: &Value) -> Result<()> {
    match domain {
        Value::String(d) => assert_valid(validate_domain(d), "domain", d.as_str()),
        other => Err(PorkbunError::ValidationError {
            field: "domain".to_string(),
            value: other.clone(),
            reason: "Domain must be a string".to_string(),
        }),
    }
}

/// Builds `{prefix}/{domain}[/{segment}...]` after validating `domain`.
///
/// Segments are appended as given, without percent-encoding.
pub(crate) fn endpoint_path(prefix: &str, domain: &str, segments: &[&str]) -> Result<String> {
    assert_valid(validate_domain(domain), "domain", domain)?;
    let mut path = format!("{prefix}/{domain}");
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    Ok(path)
}

/// Classifies a 2xx response body and decodes it into `T`.
pub(crate) fn decode_response<T: DeserializeOwned>(text: &str) -> Result<T> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        log::debug!("[{PROVIDER}] Raw response: {}", truncate_for_log(text));
        PorkbunError::response_format(format!("Response is not valid JSON: {e}"), text)
    })?;

    let Some(status) = value.get("status").and_then(Value::as_str) else {
        log::debug!("[{PROVIDER}] Raw response: {}", truncate_for_log(text));
        return Err(PorkbunError::response_format(
            "Response has no string `status` field",
            text,
        ));
    };

    if status != SUCCESS_STATUS {
        return Err(PorkbunError::ApiError {
            status: status.to_string(),
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        });
    }

    serde_json::from_value(value).map_err(|e| {
        log::debug!("[{PROVIDER}] Raw response: {}", truncate_for_log(text));
        PorkbunError::response_format(format!("Unexpected response shape: {e}"), text)
    })
}
