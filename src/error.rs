use reqwest::StatusCode;

use crate::clients::http::HttpResponse;

pub type Result<T> = std::result::Result<T, HevyError>;

#[derive(Debug, thiserror::Error)]
pub enum HevyError {
    /// 401: missing or invalid api key.
    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("not found ({status}): {message}")]
    NotFound { status: u16, message: String },

    /// 400/422 from the server, or a local precondition failure (`status` is `None`).
    #[error("validation failed{}: {message}", fmt_status(.status))]
    Validation { status: Option<u16>, message: String },

    #[error("rate limited ({status}): {message}")]
    RateLimit { status: u16, message: String },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-2xx status.
    #[error("API request failed with status {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    #[error("failed to parse {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {context} request: {source}")]
    Encode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected {context} response: {reason}")]
    UnexpectedResponse {
        context: &'static str,
        reason: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("client has been closed")]
    Closed,
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(status) => format!(" ({status})"),
        None => String::new(),
    }
}

impl HevyError {
    pub fn validation(message: impl Into<String>) -> Self {
        HevyError::Validation {
            status: None,
            message: message.into(),
        }
    }

    pub(crate) fn decode(context: &'static str, source: serde_json::Error) -> Self {
        HevyError::Decode { context, source }
    }

    pub(crate) fn unexpected(context: &'static str, reason: impl Into<String>) -> Self {
        HevyError::UnexpectedResponse {
            context,
            reason: reason.into(),
        }
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            HevyError::Auth { status, .. }
            | HevyError::NotFound { status, .. }
            | HevyError::RateLimit { status, .. }
            | HevyError::Server { status, .. }
            | HevyError::Api { status, .. } => Some(*status),
            HevyError::Validation { status, .. } => *status,
            HevyError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            HevyError::Auth { message, .. }
            | HevyError::NotFound { message, .. }
            | HevyError::Validation { message, .. }
            | HevyError::RateLimit { message, .. }
            | HevyError::Server { message, .. }
            | HevyError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Passes 2xx responses through and maps everything else onto the taxonomy.
pub(crate) fn check_status(response: HttpResponse) -> Result<HttpResponse> {
    if (200..300).contains(&response.status) {
        return Ok(response);
    }

    let status = response.status;
    let message = extract_message(status, &response.body);

    let err = match status {
        401 => HevyError::Auth { status, message },
        404 => HevyError::NotFound { status, message },
        400 | 422 => HevyError::Validation {
            status: Some(status),
            message,
        },
        429 => HevyError::RateLimit { status, message },
        500..=599 => HevyError::Server { status, message },
        _ => HevyError::Api {
            status,
            message,
            body: response.body,
        },
    };
    Err(err)
}

fn extract_message(status: u16, body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(message)) = fields.get(key) {
                return message.clone();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("unknown status")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_success_passes_through() {
        let resp = check_status(response(201, "{}")).unwrap();
        assert_eq!(resp.status, 201);
    }

    #[test]
    fn test_status_mapping() {
        let cases: [(u16, fn(&HevyError) -> bool); 7] = [
            (401, |e| matches!(e, HevyError::Auth { .. })),
            (404, |e| matches!(e, HevyError::NotFound { .. })),
            (400, |e| matches!(e, HevyError::Validation { status: Some(400), .. })),
            (422, |e| matches!(e, HevyError::Validation { status: Some(422), .. })),
            (429, |e| matches!(e, HevyError::RateLimit { .. })),
            (503, |e| matches!(e, HevyError::Server { .. })),
            (409, |e| matches!(e, HevyError::Api { status: 409, .. })),
        ];

        for (status, is_expected) in cases {
            let err = check_status(response(status, "")).unwrap_err();
            assert!(is_expected(&err), "status {status} mapped to {err:?}");
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_message_from_json_body() {
        let err = check_status(response(404, r#"{"message":"workout not found"}"#)).unwrap_err();
        assert_eq!(err.message(), "workout not found");

        let err = check_status(response(400, r#"{"error":"bad page"}"#)).unwrap_err();
        assert_eq!(err.message(), "bad page");
    }

    #[test]
    fn test_message_falls_back_to_body_then_reason() {
        let err = check_status(response(500, "upstream exploded\n")).unwrap_err();
        assert_eq!(err.message(), "upstream exploded");

        let err = check_status(response(429, "")).unwrap_err();
        assert_eq!(err.message(), "Too Many Requests");
    }

    #[test]
    fn test_generic_error_keeps_body() {
        let err = check_status(response(418, r#"{"message":"teapot"}"#)).unwrap_err();
        match err {
            HevyError::Api { status, message, body } => {
                assert_eq!(status, 418);
                assert_eq!(message, "teapot");
                assert_eq!(body, r#"{"message":"teapot"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_local_validation_has_no_status() {
        let err = HevyError::validation("page_size must be between 1 and 10");
        assert_eq!(err.status(), None);
        assert_eq!(
            err.to_string(),
            "validation failed: page_size must be between 1 and 10"
        );
    }
}
