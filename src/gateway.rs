use crate::config::AppConfig;
use crate::errors::SaveError;
use crate::sections::Section;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

// ============================================================================
// Gateway trait
// ============================================================================

/// The persistence seam: one authenticated request per save or load, one
/// result per call. Implementations never retry and never redirect; the
/// caller decides what each error means.
#[allow(async_fn_in_trait)]
pub trait Gateway: Send + Sync {
    /// GET a section's current content.
    async fn fetch(&self, section: Section, token: &str) -> Result<Value, SaveError>;

    /// POST a section's update payload.
    async fn submit<P: Serialize + Sync>(
        &self,
        section: Section,
        payload: &P,
        token: &str,
    ) -> Result<Value, SaveError>;
}

// ============================================================================
// HttpGateway — reqwest implementation
// ============================================================================

pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Gateway for HttpGateway {
    async fn fetch(&self, section: Section, token: &str) -> Result<Value, SaveError> {
        let url = self.url(&section.fetch_path());
        debug!(section = %section, %url, "Fetching section content");
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| SaveError::Unavailable(e.to_string()))?;
        read_response(response).await
    }

    async fn submit<P: Serialize + Sync>(
        &self,
        section: Section,
        payload: &P,
        token: &str,
    ) -> Result<Value, SaveError> {
        let url = self.url(&section.update_path());
        debug!(section = %section, %url, "Submitting section update");
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(|e| SaveError::Unavailable(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<Value, SaveError> {
    let status = response.status().as_u16();
    // Auth failures are decided on status alone; the body of a 401/403 need
    // not match any schema and is never parsed.
    if status == 401 || status == 403 {
        return Err(SaveError::AuthExpired);
    }
    let reason = response
        .status()
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();
    let body = response.text().await.unwrap_or_default();
    interpret(status, &reason, &body)
}

/// Map an HTTP status + body to the save-error taxonomy. Pure so the policy
/// is testable without a network.
pub(crate) fn interpret(status: u16, reason: &str, body: &str) -> Result<Value, SaveError> {
    match status {
        401 | 403 => Err(SaveError::AuthExpired),
        200..=299 => {
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(body)
                .map_err(|e| SaveError::Unavailable(format!("malformed response body: {}", e)))
        }
        413 => Err(SaveError::ValidationFailed(
            "File size too large. Please use smaller images.".to_string(),
        )),
        400..=499 => Err(SaveError::ValidationFailed(error_message(body, reason))),
        _ => Err(SaveError::Unavailable(format!("HTTP {} {}", status, reason))),
    }
}

/// Server error bodies carry either `message` (the content API) or `detail`
/// (the auth service). Fall back to the status reason.
fn error_message(body: &str, reason: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.detail))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| reason.to_string())
}

// ============================================================================
// Test utilities — recording FakeGateway
// ============================================================================

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedCall {
        pub kind: &'static str,
        pub section: Section,
        pub payload: Option<Value>,
        pub token: String,
    }

    /// Gateway double that records every call and answers with a canned
    /// result.
    pub(crate) struct FakeGateway {
        result: Result<Value, SaveError>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl FakeGateway {
        pub(crate) fn ok(value: Value) -> Self {
            Self {
                result: Ok(value),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn err(error: SaveError) -> Self {
            Self {
                result: Err(error),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub(crate) fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn last_payload(&self) -> Option<Value> {
            self.calls
                .lock()
                .unwrap()
                .last()
                .and_then(|call| call.payload.clone())
        }
    }

    impl Gateway for FakeGateway {
        async fn fetch(&self, section: Section, token: &str) -> Result<Value, SaveError> {
            self.calls.lock().unwrap().push(RecordedCall {
                kind: "fetch",
                section,
                payload: None,
                token: token.to_string(),
            });
            self.result.clone()
        }

        async fn submit<P: Serialize + Sync>(
            &self,
            section: Section,
            payload: &P,
            token: &str,
        ) -> Result<Value, SaveError> {
            self.calls.lock().unwrap().push(RecordedCall {
                kind: "submit",
                section,
                payload: Some(serde_json::to_value(payload).unwrap()),
                token: token.to_string(),
            });
            self.result.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn two_xx_parses_json_body() {
        let value = interpret(200, "OK", r#"{"status": "saved"}"#).unwrap();
        assert_eq!(value, json!({"status": "saved"}));
    }

    #[test]
    fn two_xx_empty_body_is_null() {
        assert_eq!(interpret(204, "No Content", "").unwrap(), Value::Null);
    }

    #[test]
    fn two_xx_malformed_body_is_unavailable() {
        let err = interpret(200, "OK", "<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, SaveError::Unavailable(_)));
    }

    #[test]
    fn auth_statuses_short_circuit_before_any_parse() {
        // Bodies here are deliberately not JSON; the guard must not care.
        assert_eq!(
            interpret(401, "Unauthorized", "<html>login</html>").unwrap_err(),
            SaveError::AuthExpired
        );
        assert_eq!(
            interpret(403, "Forbidden", "not json at all").unwrap_err(),
            SaveError::AuthExpired
        );
    }

    #[test]
    fn four_xx_surfaces_server_message_verbatim() {
        let err = interpret(400, "Bad Request", r#"{"message": "temple_name is required"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            SaveError::ValidationFailed("temple_name is required".to_string())
        );
    }

    #[test]
    fn four_xx_falls_back_to_detail_then_reason() {
        let err = interpret(422, "Unprocessable Entity", r#"{"detail": "invalid rating"}"#)
            .unwrap_err();
        assert_eq!(err, SaveError::ValidationFailed("invalid rating".to_string()));

        let err = interpret(404, "Not Found", "").unwrap_err();
        assert_eq!(err, SaveError::ValidationFailed("Not Found".to_string()));
    }

    #[test]
    fn oversized_request_gets_the_image_hint() {
        let err = interpret(413, "Payload Too Large", "").unwrap_err();
        assert!(matches!(err, SaveError::ValidationFailed(m) if m.contains("smaller images")));
    }

    #[test]
    fn five_xx_is_retryable() {
        let err = interpret(503, "Service Unavailable", "").unwrap_err();
        assert!(err.is_retryable());
    }
}
