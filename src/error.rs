use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_invalid_transition_error(&self) -> bool {
        self.code == 100
    }

    pub fn is_unknown_party_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_invalid_seed_error(&self) -> bool {
        self.code == 102
    }

    pub fn is_permission_denied_error(&self) -> bool {
        self.code == 103
    }

    pub fn is_inactive_session_error(&self) -> bool {
        self.code == 104
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_transition_error() -> Error {
    Error {
        code: 100,
        message: "invalid transition".into(),
    }
}

pub fn unknown_party_error() -> Error {
    Error {
        code: 101,
        message: "unknown party".into(),
    }
}

pub fn invalid_seed_error() -> Error {
    Error {
        code: 102,
        message: "invalid seed parties".into(),
    }
}

pub fn permission_denied_error() -> Error {
    Error {
        code: 103,
        message: "permission to access location was denied".into(),
    }
}

pub fn inactive_session_error() -> Error {
    Error {
        code: 104,
        message: "tracking session is not active".into(),
    }
}

pub fn env_var_error<T: Debug>(_: T) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_message() {
        let response = env_var_error(env::VarError::NotPresent).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn domain_errors_are_bad_requests() {
        let response = unknown_party_error().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = invalid_transition_error().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn predicates_match_codes() {
        assert!(invalid_transition_error().is_invalid_transition_error());
        assert!(unknown_party_error().is_unknown_party_error());
        assert!(invalid_seed_error().is_invalid_seed_error());
        assert!(permission_denied_error().is_permission_denied_error());
        assert!(inactive_session_error().is_inactive_session_error());
        assert!(!unexpected_error().is_unknown_party_error());
    }
}
