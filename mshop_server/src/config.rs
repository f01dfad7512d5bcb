use std::env;

use chrono_tz::Tz;
use khqr_tools::KhqrConfig;
use log::*;

const DEFAULT_MSHOP_HOST: &str = "127.0.0.1";
const DEFAULT_MSHOP_PORT: u16 = 8280;
const DEFAULT_DATABASE_URL: &str = "sqlite://data/mshop.db";
const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Phnom_Penh;
const DEFAULT_DEMO_USER_ID: i64 = 1;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Order timestamps are recorded in this (merchant-local) timezone.
    pub timezone: Tz,
    /// The account that storefront requests are attributed to. There is no
    /// login flow yet, so every visitor shops as this user.
    pub shopper: ShopperIdentity,
    pub khqr: KhqrConfig,
}

/// The user a storefront request acts on behalf of.
#[derive(Clone, Copy, Debug)]
pub struct ShopperIdentity {
    pub user_id: i64,
}

impl Default for ShopperIdentity {
    fn default() -> Self {
        Self { user_id: DEFAULT_DEMO_USER_ID }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MSHOP_HOST.to_string(),
            port: DEFAULT_MSHOP_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            timezone: DEFAULT_TIMEZONE,
            shopper: ShopperIdentity::default(),
            khqr: KhqrConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("MSHOP_HOST").ok().unwrap_or_else(|| DEFAULT_MSHOP_HOST.into());
        let port = env::var("MSHOP_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid port for MSHOP_PORT. {e} Using the default, {DEFAULT_MSHOP_PORT}, instead.");
                    DEFAULT_MSHOP_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_MSHOP_PORT);
        let database_url = env::var("MSHOP_DATABASE_URL").unwrap_or_else(|_| {
            warn!("🪛️ MSHOP_DATABASE_URL is not set. Using the default, {DEFAULT_DATABASE_URL}");
            DEFAULT_DATABASE_URL.to_string()
        });
        let timezone = env::var("MSHOP_TIMEZONE")
            .map(|s| {
                s.parse::<Tz>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid MSHOP_TIMEZONE. {e} Using the default, {DEFAULT_TIMEZONE}, instead.");
                    DEFAULT_TIMEZONE
                })
            })
            .ok()
            .unwrap_or(DEFAULT_TIMEZONE);
        let user_id = env::var("MSHOP_DEMO_USER_ID")
            .map(|s| {
                s.parse::<i64>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid MSHOP_DEMO_USER_ID. {e} Using the default, {DEFAULT_DEMO_USER_ID}.");
                    DEFAULT_DEMO_USER_ID
                })
            })
            .ok()
            .unwrap_or(DEFAULT_DEMO_USER_ID);
        let khqr = KhqrConfig::new_from_env_or_default();
        Self { host, port, database_url, timezone, shopper: ShopperIdentity { user_id }, khqr }
    }
}
