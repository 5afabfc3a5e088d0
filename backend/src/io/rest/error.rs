//! Translation of domain failures into HTTP responses.
//! Every error body is plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::UsuarioError;

const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

impl UsuarioError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UsuarioError::NotFound { .. } => StatusCode::NOT_FOUND,
            UsuarioError::Validation(_) => StatusCode::BAD_REQUEST,
            UsuarioError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UsuarioError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            UsuarioError::Storage(e) => {
                error!("Storage failure: {:?}", e);
                (status, INTERNAL_ERROR_MESSAGE).into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}
