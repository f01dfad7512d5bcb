use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use mshop_common::{helpers::random_reference, UsdAmount};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

/// Game code for Mobile Legends: Bang Bang top-ups.
pub const GAME_MLBB: &str = "MLBB";
/// Game code for Free Fire top-ups.
pub const GAME_FF: &str = "FF";

//--------------------------------------     OrderId       ---------------------------------------

/// The customer-facing order reference. 8 characters drawn from `[A-Z0-9]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Generate a fresh random order id. Uniqueness is only enforced at the
    /// database level, so callers must be prepared to retry on collision.
    pub fn random() -> Self {
        Self(random_reference())
    }

    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//--------------------------------------   OrderStatusType  ---------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum OrderStatusType {
    /// The order has been created and a QR code issued, but no payment has
    /// been observed yet.
    Unpaid,
    /// A payment matching the order's QR fingerprint has been confirmed.
    Paid,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unpaid => "UNPAID",
            Self::Paid => "PAID",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid conversion: {0}")]
pub struct ConversionError(pub String);

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNPAID" => Ok(Self::Unpaid),
            "PAID" => Ok(Self::Paid),
            s => Err(ConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

//--------------------------------------        Order       ---------------------------------------

/// A diamond top-up order, as stored in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub user_id: i64,
    pub game: String,
    pub item_id: String,
    /// The amount charged, in USD.
    pub amount: UsdAmount,
    /// The in-game server the diamonds are delivered to.
    pub server_id: String,
    pub zone_id: String,
    /// MD5 fingerprint of the KHQR payload. Payment notifications are matched
    /// against this value.
    pub md5: String,
    pub status: OrderStatusType,
    pub payment_response: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub paid_at: Option<DateTime<FixedOffset>>,
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {} ({}/{}) for user {}: {} [{}]",
            self.order_id, self.game, self.item_id, self.user_id, self.amount, self.status
        )
    }
}

/// The fields required to create a new [`Order`]. Status, payment response
/// and paid timestamp are owned by the storage layer.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_id: OrderId,
    pub user_id: i64,
    pub game: String,
    pub item_id: String,
    pub amount: UsdAmount,
    pub server_id: String,
    pub zone_id: String,
    pub md5: String,
    pub created_at: DateTime<FixedOffset>,
}

//--------------------------------------        User        ---------------------------------------

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: Option<String>,
    pub balance: UsdAmount,
    pub is_reseller: bool,
}

//--------------------------------------      ItemPrice     ---------------------------------------

/// A purchasable diamond pack, with the two price tiers.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ItemPrice {
    pub item_id: String,
    pub game: String,
    pub normal_price: UsdAmount,
    pub reseller_price: UsdAmount,
}

impl ItemPrice {
    pub fn new<S1, S2>(item_id: S1, game: S2, normal_price: UsdAmount, reseller_price: UsdAmount) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            item_id: item_id.into(),
            game: game.into(),
            normal_price,
            reseller_price,
        }
    }
}
