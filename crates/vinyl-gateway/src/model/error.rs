use serde::Serialize;

/// `{"error": "..."}`, returned for bad input and store failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

/// `{"message": "..."}`, returned when an album does not exist.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
