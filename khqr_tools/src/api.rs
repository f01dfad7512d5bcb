use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use log::*;
use md5::{Digest, Md5};
use qrcode::QrCode;

use crate::{
    payload::{build_payload, PaymentRequest},
    KhqrConfig,
    KhqrError,
};

/// A client for producing KHQR payment artifacts for a single configured merchant.
#[derive(Debug, Clone)]
pub struct KhqrApi {
    config: KhqrConfig,
}

impl KhqrApi {
    pub fn new(config: KhqrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KhqrConfig {
        &self.config
    }

    /// Builds a dynamic (single-use, amount-bound) KHQR payload string.
    ///
    /// `amount` is a plain decimal string, e.g. "0.03". `bill_number` is a short transaction reference that
    /// appears on the payer's receipt; it is a distinct namespace from order ids even though the format matches.
    pub fn create_qr(&self, amount: &str, bill_number: &str) -> Result<String, KhqrError> {
        let request =
            PaymentRequest { amount: amount.to_string(), bill_number: bill_number.to_string(), dynamic: true };
        let payload = build_payload(&self.config, &request)?;
        trace!("📱️ Built KHQR payload for {amount} USD (bill {bill_number})");
        Ok(payload)
    }

    /// The MD5 hex digest of a payload string. Payment notifications reference this fingerprint, so it is the
    /// correlation key between a QR code and the order that requested it.
    pub fn fingerprint(payload: &str) -> String {
        let digest = Md5::digest(payload.as_bytes());
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Renders a payload as a QR raster image and returns it as a base64-encoded PNG, suitable for embedding in
    /// a `data:image/png;base64,` URI.
    pub fn qr_image_base64(payload: &str) -> Result<String, KhqrError> {
        let code = QrCode::new(payload.as_bytes()).map_err(|e| KhqrError::QrEncodingError(e.to_string()))?;
        let image = code.render::<image::Luma<u8>>().build();
        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| KhqrError::ImageError(e.to_string()))?;
        Ok(base64::encode(png))
    }
}

#[cfg(test)]
mod test {
    use super::KhqrApi;
    use crate::KhqrConfig;

    fn api() -> KhqrApi {
        KhqrApi::new(KhqrConfig {
            bank_account: "merchant@testbank".to_string(),
            merchant_name: "PI YA LEGEND".to_string(),
            merchant_city: "Phnom Penh".to_string(),
            phone_number: "855882000544".to_string(),
            store_label: "MShop".to_string(),
            terminal_label: "Cashier-01".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn fingerprint_is_stable_md5_hex() {
        let payload = api().create_qr("0.03", "AB12CD34").unwrap();
        let fp1 = KhqrApi::fingerprint(&payload);
        let fp2 = KhqrApi::fingerprint(&payload);
        assert_eq!(fp1, fp2);
        assert_eq!(fp1.len(), 32);
        assert!(fp1.chars().all(|c| c.is_ascii_hexdigit()));
        // Known digest, pinned so accidental fingerprint changes are caught.
        assert_eq!(KhqrApi::fingerprint("hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn renders_base64_png() {
        let payload = api().create_qr("6.40", "ZZ99XX11").unwrap();
        let encoded = KhqrApi::qr_image_base64(&payload).unwrap();
        assert!(!encoded.is_empty());
        let bytes = base64::decode(&encoded).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn distinct_amounts_have_distinct_fingerprints() {
        let a = api().create_qr("0.03", "AB12CD34").unwrap();
        let b = api().create_qr("8.00", "AB12CD34").unwrap();
        assert_ne!(KhqrApi::fingerprint(&a), KhqrApi::fingerprint(&b));
    }
}
