pub mod helpers;
mod secret;
mod usd;

pub use secret::Secret;
pub use usd::{UsdAmount, UsdConversionError, USD_ISO4217_NUMERIC};
