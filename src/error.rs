use thiserror::Error;

/// Failures surfaced by the API accessor and the stores.
///
/// Store actions keep most of these out of the caller's way: only the
/// authentication guard and `login_with_google` propagate an `ApiError`;
/// everything else lands in store-local `error` state for the UI.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A guarded store action was invoked without an active session. No
    /// network call was made.
    #[error("authentication required")]
    AuthRequired,

    /// The server answered with a non-success status. `code` carries the
    /// machine-readable error code from the response body when present
    /// (e.g. `limit_reached`, `not_found`), `message` any human-readable
    /// detail.
    #[error("server returned {status}{}", fmt_code(.code))]
    Status {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    /// The request never produced a response: DNS, connect, or I/O failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

fn fmt_code(code: &Option<String>) -> String {
    match code {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl ApiError {
    /// The server-supplied error code, if this failure carries one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_code_when_present() {
        let err = ApiError::Status {
            status: 402,
            code: Some("limit_reached".into()),
            message: None,
        };
        assert_eq!(err.to_string(), "server returned 402 (limit_reached)");
        assert_eq!(err.code(), Some("limit_reached"));
    }

    #[test]
    fn status_display_without_code() {
        let err = ApiError::Status {
            status: 500,
            code: None,
            message: Some("boom".into()),
        };
        assert_eq!(err.to_string(), "server returned 500");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn auth_required_has_no_code() {
        assert_eq!(ApiError::AuthRequired.code(), None);
    }
}
