//! Mapping HTTP responses onto [`BackendError`].

use pgdesk_domain::error::BackendError;
use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn transport(err: reqwest::Error) -> BackendError {
    BackendError::Transport(Box::new(err))
}

/// Decode a 2xx body, or turn anything else into [`BackendError::Status`].
pub(crate) async fn handle<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body);
        tracing::debug!(status = status.as_u16(), ?detail, "backend answered with an error");
        return Err(BackendError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    let bytes = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&bytes).map_err(|err| BackendError::Decode(Box::new(err)))
}

/// The `detail` member of a JSON error body.
///
/// Structured details (validation error lists) are kept as compact JSON.
fn error_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        detail: Value,
    }

    match serde_json::from_str::<ErrorBody>(body).ok()?.detail {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
