use log::*;
use mshop_common::Secret;

#[derive(Debug, Clone, Default)]
pub struct KhqrConfig {
    /// Bakong API token. Only needed for server-to-server payment checks, not for payload construction.
    pub api_token: Secret<String>,
    /// The merchant's Bakong account identifier, e.g. "merchant_name@bank".
    pub bank_account: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub phone_number: String,
    pub store_label: String,
    pub terminal_label: String,
}

impl KhqrConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_token = Secret::new(std::env::var("MSHOP_KHQR_API_TOKEN").unwrap_or_else(|_| {
            warn!("MSHOP_KHQR_API_TOKEN not set. Payment status checks against the Bakong API will not work.");
            String::default()
        }));
        let bank_account = std::env::var("MSHOP_BANK_ACCOUNT").unwrap_or_else(|_| {
            warn!("MSHOP_BANK_ACCOUNT not set, using the default merchant account");
            "chhira_ly@aclb".to_string()
        });
        let merchant_name =
            std::env::var("MSHOP_MERCHANT_NAME").unwrap_or_else(|_| "PI YA LEGEND".to_string());
        let merchant_city =
            std::env::var("MSHOP_MERCHANT_CITY").unwrap_or_else(|_| "Phnom Penh".to_string());
        let phone_number = std::env::var("MSHOP_PHONE_NUMBER").unwrap_or_else(|_| {
            warn!("MSHOP_PHONE_NUMBER not set, using the default merchant phone number");
            "855882000544".to_string()
        });
        let store_label = std::env::var("MSHOP_STORE_LABEL").unwrap_or_else(|_| "MShop".to_string());
        let terminal_label =
            std::env::var("MSHOP_TERMINAL_LABEL").unwrap_or_else(|_| "Cashier-01".to_string());
        Self { api_token, bank_account, merchant_name, merchant_city, phone_number, store_label, terminal_label }
    }
}
