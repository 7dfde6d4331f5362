use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// JSON request body decoded regardless of `Content-Type`.
///
/// Clients post JSON without always labelling it; only a body that fails to
/// parse is rejected, as `ApiError::Body`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Body(e.body_text()))?;
        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::Body(e.to_string()))?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::header;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Biz {
        name: String,
    }

    async fn extract(req: Request) -> Result<Biz, ApiError> {
        JsonBody::<Biz>::from_request(req, &()).await.map(|JsonBody(b)| b)
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let req = Request::builder().method("POST").body(Body::from(r#"{"name":"Acme"}"#)).unwrap();
        assert_eq!(extract(req).await.unwrap(), Biz { name: "Acme".into() });
    }

    #[tokio::test]
    async fn ignores_a_mismatched_content_type() {
        let req = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"name":"Acme"}"#))
            .unwrap();
        assert_eq!(extract(req).await.unwrap(), Biz { name: "Acme".into() });
    }

    #[tokio::test]
    async fn malformed_json_is_a_body_error() {
        let req = Request::builder().method("POST").body(Body::from("{not json")).unwrap();
        assert!(matches!(extract(req).await, Err(ApiError::Body(_))));
    }

    #[tokio::test]
    async fn empty_body_is_a_body_error() {
        let req = Request::builder().method("POST").body(Body::empty()).unwrap();
        assert!(matches!(extract(req).await, Err(ApiError::Body(_))));
    }
}
