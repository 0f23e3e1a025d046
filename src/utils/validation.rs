//! Request body validation
//!
//! [`ValidatedJson`] decodes a JSON body and runs the payload's declarative
//! schema checks before the handler sees it. Decode failures (malformed JSON,
//! missing or unknown fields, wrong types) become `{"error": ...}` responses;
//! constraint violations become a field-to-messages map. Both are HTTP 400.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::AppError;

/// JSON extractor that rejects payloads failing schema validation
///
/// ```ignore
/// pub async fn create(
///     State(state): State<ServerState>,
///     ValidatedJson(payload): ValidatedJson<MemberCreate>,
/// ) -> AppResult<(StatusCode, Json<Member>)> { ... }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid(rejection.body_text()))?;
        payload.validate()?;
        Ok(Self(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberCreate;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, header};

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/members")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_a_valid_payload() {
        let req = json_request(r#"{"name":"Ann","email":"ann@x.com","phone":"5551234567"}"#);
        let ValidatedJson(payload) = ValidatedJson::<MemberCreate>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.name, "Ann");
    }

    #[tokio::test]
    async fn missing_field_is_an_invalid_request() {
        let req = json_request(r#"{"name":"Ann","email":"ann@x.com"}"#);
        let err = ValidatedJson::<MemberCreate>::from_request(req, &())
            .await
            .unwrap_err();
        match err {
            AppError::Invalid(msg) => assert!(msg.contains("phone")),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn constraint_violation_is_a_validation_error() {
        let req = json_request(r#"{"name":"","email":"ann@x.com","phone":"5551234567"}"#);
        let err = ValidatedJson::<MemberCreate>::from_request(req, &())
            .await
            .unwrap_err();
        match err {
            AppError::Validation(fields) => assert!(fields.contains_key("name")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
