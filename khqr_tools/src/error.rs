use thiserror::Error;

#[derive(Debug, Error)]
pub enum KhqrError {
    #[error("Field {field} is too long ({len} > {max} characters)")]
    FieldTooLong { field: &'static str, len: usize, max: usize },
    #[error("Field {0} must not be empty")]
    FieldEmpty(&'static str),
    #[error("Invalid currency amount: {0}")]
    InvalidAmount(String),
    #[error("Could not encode payload as a QR code: {0}")]
    QrEncodingError(String),
    #[error("Could not render QR image: {0}")]
    ImageError(String),
}
