use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::error;

const INDENT: &[u8] = b"    ";

/// A JSON response body indented with four spaces.
///
/// Read endpoints answer with indented JSON so the output is legible from a
/// terminal; everything else uses [`axum::Json`].
#[derive(Debug, Clone)]
pub struct PrettyJson<T> {
    status: StatusCode,
    value: T,
}

impl<T> PrettyJson<T> {
    pub fn new(status: StatusCode, value: T) -> Self {
        Self { status, value }
    }

    pub fn ok(value: T) -> Self {
        Self::new(StatusCode::OK, value)
    }
}

fn to_vec_indented<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut body = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(body)
}

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match to_vec_indented(&self.value) {
            Ok(body) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                error!(error = %err, "failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn body_is_indented() {
        let response = PrettyJson::new(StatusCode::NOT_FOUND, json!({"message": "x"})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"{\n    \"message\": \"x\"\n}");
    }

    #[tokio::test]
    async fn nested_values_indent_per_level() {
        let response = PrettyJson::ok(json!([{"id": 1}])).into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"[\n    {\n        \"id\": 1\n    }\n]");
    }
}
