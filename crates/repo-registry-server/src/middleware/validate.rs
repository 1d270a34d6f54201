//! Validation gates that run before the route handlers.
//!
//! - [`require_existing_repository`] guards every `/repositories/:id` route.
//! - [`ValidatedRepository`] extracts and checks a creation body.
//!
//! Both short-circuit with a `400` and a JSON error body, so a handler behind
//! them only ever sees valid input.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Path, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use repo_registry::{
    validate_creation, validate_existing_id, CreateRepository, NewRepository, RegistryError,
};

use crate::error::ApiError;
use crate::AppState;

/// Middleware that rejects requests whose `:id` is not a UUID of an existing
/// repository.
///
/// Mount with `route_layer` so the path parameters are already matched.
pub async fn require_existing_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let checked = validate_existing_id(&state.registry(), &id);
    if let Err(err) = checked {
        tracing::debug!(id = %id, "Rejected request for unknown repository");
        return Err(err.into());
    }
    Ok(next.run(request).await)
}

/// A creation payload that passed validation.
///
/// Syntactically invalid JSON is rejected by the inner [`Json`] extractor.
/// A well-formed body with missing, empty, or mistyped `title`, `url`, or
/// `techs` is rejected with "Invalid params".
#[derive(Debug)]
pub struct ValidatedRepository(pub NewRepository);

#[async_trait]
impl<S> FromRequest<S> for ValidatedRepository
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        serde_json::from_value::<CreateRepository>(value)
            .map_err(|_| RegistryError::InvalidParams)
            .and_then(validate_creation)
            .map(ValidatedRepository)
            .map_err(|err| {
                tracing::debug!("Rejected repository creation payload");
                ApiError::from(err).into_response()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorBody;
    use axum::{
        http::{header, StatusCode},
        middleware,
        routing::{post, put},
        Router,
    };
    use repo_registry::Registry;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn accept() -> &'static str {
        "passed"
    }

    async fn create(ValidatedRepository(new): ValidatedRepository) -> String {
        new.title().to_string()
    }

    fn guarded(state: AppState) -> Router {
        Router::new()
            .route("/repositories/:id", put(accept))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_existing_repository,
            ))
            .with_state(state)
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn error_of(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice::<ErrorBody>(&body).unwrap().error
    }

    fn put_request(id: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(format!("/repositories/{id}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_existing_id_passes() {
        let mut registry = Registry::new();
        let created = registry.create(
            validate_creation(CreateRepository {
                title: Some("a".to_string()),
                url: Some("http://a".to_string()),
                techs: Some(vec!["rust".to_string()]),
            })
            .unwrap(),
        );
        let app = guarded(AppState::with_registry(registry));

        let response = app
            .oneshot(put_request(&created.id.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_absent_id_is_rejected() {
        let app = guarded(AppState::new());

        let response = app
            .oneshot(put_request(&Uuid::new_v4().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(response).await, "Repository not found.");
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let app = guarded(AppState::new());

        let response = app.oneshot(put_request("not-a-uuid")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(response).await, "Repository not found.");
    }

    #[tokio::test]
    async fn test_valid_creation_body_extracts() {
        let app: Router = Router::new().route("/repositories", post(create));

        let response = app
            .oneshot(json_request(
                "/repositories",
                r#"{"title":"repo-a","url":"http://x","techs":["node"]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"repo-a");
    }

    #[tokio::test]
    async fn test_incomplete_creation_body_is_rejected() {
        let bodies = [
            r#"{"title":"r","url":""}"#,
            r#"{"url":"http://x","techs":["node"]}"#,
            r#"{"title":"r","url":"http://x","techs":[]}"#,
            r#"{"title":5,"url":"http://x","techs":["node"]}"#,
            r#"{}"#,
            r#"null"#,
        ];
        for body in bodies {
            let app: Router = Router::new().route("/repositories", post(create));
            let response = app
                .oneshot(json_request("/repositories", body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(error_of(response).await, "Invalid params");
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_left_to_the_extractor() {
        let app: Router = Router::new().route("/repositories", post(create));

        let response = app
            .oneshot(json_request("/repositories", "{not json"))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        assert_ne!(response.status(), StatusCode::OK);
    }
}
