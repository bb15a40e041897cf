//! Mapping of request-body rejections to RFC 9457 problem documents.

use axum::extract::rejection::JsonRejection;

use crate::problem::{Problem, ValidationViolation};

/// Build a problem document for a rejected `/echo` body.
///
/// Shape errors (missing or wrong-typed `message`) carry a field-level
/// violation; a syntactically broken body only gets the rejection text.
pub fn rejection_to_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let mut problem = Problem::new(
        rejection.status(),
        "Validation Failed",
        rejection.body_text(),
    )
    .with_instance(instance)
    .with_code("REQUEST_VALIDATION_FAILED");

    if let Some(id) = trace_id {
        problem = problem.with_trace_id(id);
    }

    if matches!(rejection, JsonRejection::JsonDataError(_)) {
        problem = problem.with_errors(vec![ValidationViolation {
            field: "message".to_owned(),
            message: "message is required and must be a string".to_owned(),
            code: None,
        }]);
    }

    problem
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::Json;
    use axum::extract::FromRequest as _;
    use axum::http::{Request, StatusCode, header};

    use crate::api::rest::dto::EchoRequest;

    async fn reject(body: &str) -> JsonRejection {
        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body.to_owned()))
            .unwrap();
        Json::<EchoRequest>::from_request(request, &())
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn missing_field_maps_to_422_with_violation() {
        let rejection = reject(r#"{"not_message":"hi"}"#).await;
        let problem = rejection_to_problem(&rejection, "/echo");

        assert_eq!(problem.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(problem.instance, "/echo");
        let errors = problem.errors.unwrap();
        assert_eq!(errors[0].field, "message");
    }

    #[tokio::test]
    async fn wrong_type_maps_to_422_with_violation() {
        let rejection = reject(r#"{"message":42}"#).await;
        let problem = rejection_to_problem(&rejection, "/echo");

        assert_eq!(problem.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(problem.errors.is_some());
    }

    #[tokio::test]
    async fn syntax_error_is_a_client_error_without_field_violation() {
        let rejection = reject("{not json").await;
        let problem = rejection_to_problem(&rejection, "/echo");

        assert!(problem.status.is_client_error());
        assert!(problem.errors.is_none());
    }
}
