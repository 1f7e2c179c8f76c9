use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};
use vinyl_core::StoreError;

use crate::json::PrettyJson;
use crate::model::{ErrorResponse, MessageResponse};

pub type Result<T> = std::result::Result<T, AppError>;

/// Everything a handler can fail with. Each variant maps to one status code
/// and a fixed JSON body; details only go to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidInput(String),
    #[error("album not found")]
    NotFound,
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
        /// Whether the body is rendered like the endpoint's success body.
        indented: bool,
    },
}

impl AppError {
    pub fn store(context: &'static str, source: StoreError) -> Self {
        AppError::Store {
            context,
            source,
            indented: false,
        }
    }

    /// A store failure on an endpoint that answers with indented JSON.
    pub fn store_indented(context: &'static str, source: StoreError) -> Self {
        AppError::Store {
            context,
            source,
            indented: true,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput(reason) => {
                warn!(%reason, "rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "Invalid input",
                    }),
                )
                    .into_response()
            }
            AppError::NotFound => PrettyJson::new(
                StatusCode::NOT_FOUND,
                MessageResponse {
                    message: "album not found",
                },
            )
            .into_response(),
            AppError::Store {
                context,
                source,
                indented,
            } => {
                error!(error = %source, "{context}");
                let body = ErrorResponse { error: context };
                if indented {
                    PrettyJson::new(StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
                }
            }
        }
    }
}
