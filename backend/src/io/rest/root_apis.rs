use axum::{http::StatusCode, response::IntoResponse};
use tracing::info;

pub const GREETING: &str = "Hola Mundo";

/// Plain-text greeting on GET /
pub async fn greeting() -> impl IntoResponse {
    info!("GET /");
    (StatusCode::OK, GREETING)
}
