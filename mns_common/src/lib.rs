mod usd_amount;

pub mod op;
mod secret;

pub use secret::Secret;
pub use usd_amount::{UsdAmount, UsdAmountConversionError, USD_CURRENCY_CODE, USD_CURRENCY_CODE_LOWER};
