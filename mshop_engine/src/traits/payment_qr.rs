use mshop_common::UsdAmount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rendered payment QR code, ready to hand to a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentQr {
    /// PNG image of the QR code, base64-encoded.
    pub image_b64: String,
    /// MD5 fingerprint of the QR payload. Payment notifications carry this
    /// value, so it is what links a bank transaction back to an order.
    pub fingerprint: String,
}

#[derive(Debug, Clone, Error)]
#[error("QR generation failed. {0}")]
pub struct QrGenerationError(pub String);

/// Produces payment QR codes for a given charge amount.
///
/// The production implementation builds KHQR payloads, but the order workflow
/// only cares about getting an image and a fingerprint back.
#[allow(async_fn_in_trait)]
pub trait PaymentQrGenerator {
    async fn generate_qr(&self, amount: UsdAmount) -> Result<PaymentQr, QrGenerationError>;
}
