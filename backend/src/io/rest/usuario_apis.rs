//! # REST API for Usuario Management
//!
//! Endpoints for listing, retrieving, creating, updating, and deleting
//! usuarios. Successful responses are JSON; failures are plain text.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{CreateUsuarioCommand, UpdateUsuarioCommand, UsuarioError};
use crate::io::rest::mappers::usuario_mapper::UsuarioMapper;
use crate::AppState;

/// Create the usuarios API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_usuarios).post(create_usuario))
        .route(
            "/:id",
            get(get_usuario).put(update_usuario).delete(delete_usuario),
        )
}

/// List all usuarios
pub async fn list_usuarios(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/usuarios");

    match state.usuario_service.list_usuarios().await {
        Ok(usuarios) => (StatusCode::OK, Json(UsuarioMapper::to_dto_list(usuarios))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a usuario by ID
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/usuarios/{}", id);

    match state.usuario_service.get_usuario(&id).await {
        Ok(usuario) => (StatusCode::OK, Json(UsuarioMapper::to_dto(usuario))).into_response(),
        Err(e) => failure("get usuario", e),
    }
}

/// Create a new usuario
pub async fn create_usuario(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let payload = UsuarioMapper::payload_from_body(body.map(|Json(value)| value));
    info!("POST /api/usuarios - payload: {:?}", payload);

    let command = CreateUsuarioCommand { payload };
    match state.usuario_service.create_usuario(command).await {
        Ok(usuario) => (StatusCode::OK, Json(UsuarioMapper::to_dto(usuario))).into_response(),
        Err(e) => failure("create usuario", e),
    }
}

/// Rename a usuario
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let payload = UsuarioMapper::payload_from_body(body.map(|Json(value)| value));
    info!("PUT /api/usuarios/{} - payload: {:?}", id, payload);

    let command = UpdateUsuarioCommand { id, payload };
    match state.usuario_service.update_usuario(command).await {
        Ok(usuario) => (StatusCode::OK, Json(UsuarioMapper::to_dto(usuario))).into_response(),
        Err(e) => failure("update usuario", e),
    }
}

/// Delete a usuario, responding with the removed record
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/usuarios/{}", id);

    match state.usuario_service.delete_usuario(&id).await {
        Ok(usuario) => (StatusCode::OK, Json(UsuarioMapper::to_dto(usuario))).into_response(),
        Err(e) => failure("delete usuario", e),
    }
}

fn failure(action: &str, e: UsuarioError) -> axum::response::Response {
    // Storage failures are logged with detail by the error response itself
    if !matches!(e, UsuarioError::Storage(_)) {
        warn!("Failed to {}: {}", action, e);
    }
    e.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_router, initialize_backend, App, ServerConfig};
    use axum::{
        body::Body,
        http::{Method, Request},
    };
    use serde_json::json;
    use shared::Usuario;
    use tower::util::ServiceExt; // for `oneshot`

    fn setup_test_app() -> App {
        let state = initialize_backend();
        create_router(state, &ServerConfig::default()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_usuarios_returns_seed() {
        let app = setup_test_app();

        let response = app.oneshot(empty_request(Method::GET, "/api/usuarios")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let usuarios: Vec<Usuario> = body_json(response).await;
        assert_eq!(usuarios.len(), 4);
        assert_eq!(usuarios[0].nombre, "Juan");
    }

    #[tokio::test]
    async fn test_get_seeded_usuario() {
        let app = setup_test_app();

        let response = app.oneshot(empty_request(Method::GET, "/api/usuarios/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let usuario: Value = body_json(response).await;
        assert_eq!(usuario, json!({ "id": 1, "nombre": "Juan" }));
    }

    #[tokio::test]
    async fn test_get_unknown_usuario_is_404_text() {
        let app = setup_test_app();

        let response = app.oneshot(empty_request(Method::GET, "/api/usuarios/999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_text(response).await, "El usuario no fue encontrado");
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_404() {
        let app = setup_test_app();

        let response = app.oneshot(empty_request(Method::GET, "/api/usuarios/abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_usuario() {
        let app = setup_test_app();

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/usuarios", json!({ "nombre": "Bob" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let created: Usuario = body_json(response).await;
        assert_eq!(created.id, 5);
        assert_eq!(created.nombre, "Bob");

        let response = app.oneshot(empty_request(Method::GET, "/api/usuarios/5")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_short_name_is_400() {
        let app = setup_test_app();

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/usuarios", json!({ "nombre": "Bo" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "\"nombre\" length must be at least 3 characters long"
        );

        let response = app.oneshot(empty_request(Method::GET, "/api/usuarios")).await.unwrap();
        let usuarios: Vec<Usuario> = body_json(response).await;
        assert_eq!(usuarios.len(), 4);
    }

    #[tokio::test]
    async fn test_create_without_body_is_required_error() {
        let app = setup_test_app();

        let response = app.oneshot(empty_request(Method::POST, "/api/usuarios")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "\"nombre\" is required");
    }

    #[tokio::test]
    async fn test_create_with_malformed_json_is_400() {
        let app = setup_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/usuarios")
            .header("content-type", "application/json")
            .body(Body::from("{\"nombre\": "))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_wrong_types_is_400() {
        let app = setup_test_app();

        let cases = [
            (json!({ "nombre": 42 }), "\"nombre\" must be a string"),
            (json!({ "nombre": "Bob", "edad": 3 }), "\"edad\" is not allowed"),
            (
                json!({ "nombre": "Bo", "edad": 3 }),
                "\"nombre\" length must be at least 3 characters long",
            ),
            (json!({ "edad": 3 }), "\"nombre\" is required"),
            (json!("Bob"), "\"value\" must be of type object"),
        ];

        for (body, expected) in cases {
            let response = app
                .clone()
                .oneshot(json_request(Method::POST, "/api/usuarios", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_text(response).await, expected);
        }
    }

    #[tokio::test]
    async fn test_update_usuario() {
        let app = setup_test_app();

        let response = app
            .clone()
            .oneshot(json_request(Method::PUT, "/api/usuarios/2", json!({ "nombre": "Karina" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: Value = body_json(response).await;
        assert_eq!(updated, json!({ "id": 2, "nombre": "Karina" }));

        let response = app.oneshot(empty_request(Method::GET, "/api/usuarios/2")).await.unwrap();
        let fetched: Value = body_json(response).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_invalid_name_is_400() {
        let app = setup_test_app();

        let response = app
            .oneshot(json_request(Method::PUT, "/api/usuarios/1", json!({ "nombre": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "\"nombre\" is not allowed to be empty");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404_without_validating_body() {
        let app = setup_test_app();

        let response = app
            .clone()
            .oneshot(json_request(Method::PUT, "/api/usuarios/999", json!({ "nombre": "x" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(empty_request(Method::PUT, "/api/usuarios/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let app = setup_test_app();

        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, "/api/usuarios/3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let removed: Value = body_json(response).await;
        assert_eq!(removed, json!({ "id": 3, "nombre": "Diego" }));

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/api/usuarios/3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(empty_request(Method::DELETE, "/api/usuarios/3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_after_deletes_gets_fresh_id() {
        let app = setup_test_app();

        for id in ["1", "2"] {
            let uri = format!("/api/usuarios/{}", id);
            let response = app.clone().oneshot(empty_request(Method::DELETE, &uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/usuarios", json!({ "nombre": "Bob" })))
            .await
            .unwrap();
        let created: Usuario = body_json(response).await;

        let response = app.oneshot(empty_request(Method::GET, "/api/usuarios")).await.unwrap();
        let usuarios: Vec<Usuario> = body_json(response).await;
        let ids: Vec<u64> = usuarios.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 4, created.id]);
        assert_eq!(created.id, 5);
    }
}
