use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Errors a handler can return. Each renders as
/// `{ "error": { "code": "...", "message": "..." } }`.
#[derive(Debug)]
pub enum AppError {
    /// The request body was refused before reaching the handler. Carries the
    /// extractor's own status (400 syntax, 415 content type, 422 shape, 413 size).
    Rejected(StatusCode, String),
    /// No route matched.
    NotFound(String),
    /// The body parsed but is not acceptable for this endpoint.
    UnprocessableEntity(String),
    /// Storage or other server-side failure. Logged in full, never shown to the client.
    Internal(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: &'a str,
}

impl AppError {
    /// Keep the status axum chose for a JSON body rejection.
    #[must_use]
    pub fn from_rejection(rejection: &JsonRejection) -> Self {
        Self::Rejected(rejection.status(), rejection.body_text())
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Rejected(status, _) => *status,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code sent to clients.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Rejected(status, _) => match status.as_u16() {
                413 => "PAYLOAD_TOO_LARGE",
                415 => "UNSUPPORTED_MEDIA_TYPE",
                422 => "VALIDATION_ERROR",
                _ => "BAD_REQUEST",
            },
            Self::NotFound(_) => "NOT_FOUND",
            Self::UnprocessableEntity(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match &self {
            Self::Rejected(_, msg) | Self::NotFound(msg) | Self::UnprocessableEntity(msg) => {
                msg.as_str()
            }
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                "An internal error occurred"
            }
        };

        (
            status,
            Json(ErrorBody {
                error: ErrorDetail { code, message },
            }),
        )
            .into_response()
    }
}

/// Lets `?` turn database and other library errors into `AppError::Internal`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
