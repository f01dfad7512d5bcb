use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use mshop_engine::OrderManagerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Could not generate a payment QR code")]
    PaymentGenerationFailed,
    // Clients match on this body, so the wording is part of the API.
    #[error("not found")]
    NoRecordFound,
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NoRecordFound => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PaymentGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<OrderManagerError> for ServerError {
    fn from(e: OrderManagerError) -> Self {
        match e {
            OrderManagerError::ItemNotFound { .. } => Self::NoRecordFound,
            OrderManagerError::OrderNotFound(_) => Self::NoRecordFound,
            OrderManagerError::PaymentGenerationFailed => Self::PaymentGenerationFailed,
            OrderManagerError::OrderIdAllocation(_) => Self::BackendError(e.to_string()),
            OrderManagerError::StorageError(e) => Self::BackendError(e.to_string()),
        }
    }
}
