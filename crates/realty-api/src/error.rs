//! HTTP error mapping
//!
//! Each handler tags domain failures with its [`Operation`], so the caller
//! always receives that operation's catalogue message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use realty_core::DomainError;
use thiserror::Error;

use crate::messages::{self, Operation};
use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{operation:?} failed: {source}")]
    Domain {
        operation: Operation,
        #[source]
        source: DomainError,
    },

    #[error("{operation:?} failed: malformed id {raw}")]
    InvalidId { operation: Operation, raw: String },

    #[error("{operation:?} failed: invalid request: {reason}")]
    InvalidRequest { operation: Operation, reason: String },

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),
}

impl ApiError {
    /// Adapter for `map_err` that tags a domain error with its operation.
    pub fn on(operation: Operation) -> impl FnOnce(DomainError) -> ApiError {
        move |source| ApiError::Domain { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain { source, .. } => match source {
                DomainError::PropertyNotFound(_) | DomainError::UserNotFound(_) => StatusCode::NOT_FOUND,
                DomainError::Unauthorized { .. } => StatusCode::FORBIDDEN,
                DomainError::EmailAlreadyExists(_) => StatusCode::CONFLICT,
                DomainError::ValidationError(_) => StatusCode::BAD_REQUEST,
                DomainError::QueryError(_)
                | DomainError::PersistenceError(_)
                | DomainError::PasswordHashError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InvalidId { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Domain { source, .. } => match source {
                DomainError::PropertyNotFound(_) | DomainError::UserNotFound(_) => "NOT_FOUND",
                DomainError::Unauthorized { .. } => "UNAUTHORIZED",
                DomainError::EmailAlreadyExists(_) => "DUPLICATE_EMAIL",
                DomainError::ValidationError(_) => "VALIDATION_ERROR",
                DomainError::QueryError(_) => "QUERY_ERROR",
                DomainError::PersistenceError(_) | DomainError::PasswordHashError(_) => "PERSISTENCE_ERROR",
            },
            ApiError::InvalidId { .. } => "NOT_FOUND",
            ApiError::InvalidRequest { .. } => "VALIDATION_ERROR",
            ApiError::Unauthenticated(_) => "UNAUTHENTICATED",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Domain { source: DomainError::Unauthorized { .. }, .. } => messages::NOT_AUTHORIZED,
            ApiError::Domain { source: DomainError::EmailAlreadyExists(_), .. } => messages::DUPLICATE_EMAIL,
            ApiError::Domain { operation, .. }
            | ApiError::InvalidId { operation, .. }
            | ApiError::InvalidRequest { operation, .. } => operation.failure_message(),
            ApiError::Unauthenticated(_) => messages::AUTHENTICATION_REQUIRED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let body = Json(ApiResponse::error(self.code(), self.message()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_uses_operation_message() {
        let err = ApiError::on(Operation::PropertyShow)(DomainError::PropertyNotFound(Uuid::new_v4()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.message(), "Falha ao exibir o imóvel!");
    }

    #[test]
    fn test_not_owner_is_forbidden() {
        let err = ApiError::on(Operation::PropertyDelete)(DomainError::Unauthorized {
            actor: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
        });
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.message(), messages::NOT_AUTHORIZED);
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let err = ApiError::on(Operation::UserCreate)(DomainError::EmailAlreadyExists("a@b.com".into()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "DUPLICATE_EMAIL");
        assert_eq!(err.message(), messages::DUPLICATE_EMAIL);
    }

    #[test]
    fn test_store_faults_keep_operation_message() {
        let err = ApiError::on(Operation::PropertyList)(DomainError::QueryError("boom".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "QUERY_ERROR");
        assert_eq!(err.message(), "Falha ao listar os imóveis!");
    }
}
