use khqr_tools::KhqrApi;
use log::*;
use mshop_common::{helpers::random_reference, UsdAmount};
use mshop_engine::traits::{PaymentQr, PaymentQrGenerator, QrGenerationError};

/// Produces KHQR payment codes for the order workflow.
///
/// Each QR code gets a fresh random bill number, so two orders for the same
/// amount still produce distinct payloads and therefore distinct MD5
/// fingerprints.
#[derive(Clone, Debug)]
pub struct KhqrQrGenerator {
    api: KhqrApi,
}

impl KhqrQrGenerator {
    pub fn new(api: KhqrApi) -> Self {
        Self { api }
    }
}

impl PaymentQrGenerator for KhqrQrGenerator {
    async fn generate_qr(&self, amount: UsdAmount) -> Result<PaymentQr, QrGenerationError> {
        let bill_number = random_reference();
        let payload = self.api.create_qr(&amount.to_string(), &bill_number).map_err(|e| {
            error!("📱️ Could not build a KHQR payload for {amount}. {e}");
            QrGenerationError(e.to_string())
        })?;
        let fingerprint = KhqrApi::fingerprint(&payload);
        let image_b64 = KhqrApi::qr_image_base64(&payload).map_err(|e| {
            error!("📱️ Could not render the KHQR payload as a QR image. {e}");
            QrGenerationError(e.to_string())
        })?;
        trace!("📱️ Generated KHQR code {fingerprint} for {amount}");
        Ok(PaymentQr { image_b64, fingerprint })
    }
}
