//! EMVCo merchant-presented payload construction for KHQR.

use mshop_common::USD_ISO4217_NUMERIC;

use crate::{KhqrConfig, KhqrError};

const ID_PAYLOAD_FORMAT: &str = "00";
const ID_POINT_OF_INITIATION: &str = "01";
const ID_MERCHANT_ACCOUNT: &str = "29";
const ID_MERCHANT_CATEGORY_CODE: &str = "52";
const ID_TRANSACTION_CURRENCY: &str = "53";
const ID_TRANSACTION_AMOUNT: &str = "54";
const ID_COUNTRY_CODE: &str = "58";
const ID_MERCHANT_NAME: &str = "59";
const ID_MERCHANT_CITY: &str = "60";
const ID_ADDITIONAL_DATA: &str = "62";
const ID_CRC: &str = "63";

// Sub-fields of the additional data template.
const SUB_ID_BILL_NUMBER: &str = "01";
const SUB_ID_MOBILE_NUMBER: &str = "02";
const SUB_ID_STORE_LABEL: &str = "03";
const SUB_ID_TERMINAL_LABEL: &str = "07";

const PAYLOAD_FORMAT_VERSION: &str = "01";
const POINT_OF_INITIATION_STATIC: &str = "11";
const POINT_OF_INITIATION_DYNAMIC: &str = "12";
// "Miscellaneous stores", the generic retail category.
const MERCHANT_CATEGORY_GENERAL: &str = "5999";
const COUNTRY_CODE_KH: &str = "KH";

/// Per-transaction inputs for a KHQR payload. Merchant identity comes from [`KhqrConfig`].
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    /// Decimal amount string, e.g. "0.03".
    pub amount: String,
    /// Short transaction reference, printed on the payer's receipt.
    pub bill_number: String,
    /// Dynamic payloads are single-use and amount-bound; static ones are reusable.
    pub dynamic: bool,
}

/// Encodes one tag/length/value field. EMVCo lengths are two decimal digits, so values are capped at 99
/// characters; individual fields carry tighter limits, enforced in [`build_payload`].
fn emv_field(id: &str, value: &str) -> String {
    format!("{id}{:02}{value}", value.len())
}

fn checked_field(id: &str, name: &'static str, value: &str, max: usize) -> Result<String, KhqrError> {
    if value.is_empty() {
        return Err(KhqrError::FieldEmpty(name));
    }
    if value.len() > max {
        return Err(KhqrError::FieldTooLong { field: name, len: value.len(), max });
    }
    Ok(emv_field(id, value))
}

/// Builds the full KHQR payload string, including the trailing CRC field.
pub fn build_payload(config: &KhqrConfig, request: &PaymentRequest) -> Result<String, KhqrError> {
    let amount = request.amount.as_str();
    if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit() || c == '.') || amount.matches('.').count() > 1
    {
        return Err(KhqrError::InvalidAmount(amount.to_string()));
    }
    let mut payload = String::with_capacity(256);
    payload.push_str(&emv_field(ID_PAYLOAD_FORMAT, PAYLOAD_FORMAT_VERSION));
    let initiation = if request.dynamic { POINT_OF_INITIATION_DYNAMIC } else { POINT_OF_INITIATION_STATIC };
    payload.push_str(&emv_field(ID_POINT_OF_INITIATION, initiation));
    let account = checked_field("00", "bank_account", &config.bank_account, 32)?;
    payload.push_str(&checked_field(ID_MERCHANT_ACCOUNT, "merchant_account", &account, 99)?);
    payload.push_str(&emv_field(ID_MERCHANT_CATEGORY_CODE, MERCHANT_CATEGORY_GENERAL));
    payload.push_str(&emv_field(ID_TRANSACTION_CURRENCY, USD_ISO4217_NUMERIC));
    if request.dynamic {
        payload.push_str(&checked_field(ID_TRANSACTION_AMOUNT, "amount", amount, 13)?);
    }
    payload.push_str(&emv_field(ID_COUNTRY_CODE, COUNTRY_CODE_KH));
    payload.push_str(&checked_field(ID_MERCHANT_NAME, "merchant_name", &config.merchant_name, 25)?);
    payload.push_str(&checked_field(ID_MERCHANT_CITY, "merchant_city", &config.merchant_city, 15)?);
    let mut additional = String::new();
    additional.push_str(&checked_field(SUB_ID_BILL_NUMBER, "bill_number", &request.bill_number, 25)?);
    additional.push_str(&checked_field(SUB_ID_MOBILE_NUMBER, "phone_number", &config.phone_number, 25)?);
    additional.push_str(&checked_field(SUB_ID_STORE_LABEL, "store_label", &config.store_label, 25)?);
    additional.push_str(&checked_field(SUB_ID_TERMINAL_LABEL, "terminal_label", &config.terminal_label, 25)?);
    payload.push_str(&checked_field(ID_ADDITIONAL_DATA, "additional_data", &additional, 99)?);
    // The CRC covers everything up to and including its own tag and length.
    payload.push_str(ID_CRC);
    payload.push_str("04");
    let crc = crc16_ccitt(payload.as_bytes());
    payload.push_str(&format!("{crc:04X}"));
    Ok(payload)
}

/// CRC-16/CCITT-FALSE (polynomial 0x1021, initial value 0xFFFF), as mandated by the EMVCo QR spec.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
