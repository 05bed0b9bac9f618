use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::Type;
use thiserror::Error;

use crate::op;

pub const USD_CURRENCY_CODE: &str = "USD";
pub const USD_CURRENCY_CODE_LOWER: &str = "usd";

//--------------------------------------     UsdAmount       ---------------------------------------------------------

/// A USD amount in integer minor units (cents).
///
/// JSON payloads carry decimal dollars, so (de)serialization converts between the two. Deserialization stores to the
/// nearest cent. [`UsdAmount::from_dollars`] truncates instead, which is what the payment processor bridge needs when
/// converting a charge amount to minor units.
#[derive(Debug, Clone, Copy, Default, Type, Ord, PartialOrd)]
#[sqlx(transparent)]
pub struct UsdAmount(i64);

op!(binary UsdAmount, Add, add);
op!(binary UsdAmount, Sub, sub);
op!(inplace UsdAmount, SubAssign, sub_assign);
op!(unary UsdAmount, Neg, neg);

impl Mul<i64> for UsdAmount {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.value() * rhs)
    }
}

impl Sum for UsdAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in US cents: {0}")]
pub struct UsdAmountConversionError(String);

impl From<i64> for UsdAmount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl PartialEq for UsdAmount {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for UsdAmount {}

impl TryFrom<u64> for UsdAmount {
    type Error = UsdAmountConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            Err(UsdAmountConversionError(format!("Value {} is too large to convert to UsdAmount", value)))
        } else {
            #[allow(clippy::cast_possible_wrap)]
            Ok(Self(value as i64))
        }
    }
}

impl Display for UsdAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{sign}${}.{:02}", cents / 100, cents % 100)
    }
}

impl Serialize for UsdAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_dollars())
    }
}

impl<'de> Deserialize<'de> for UsdAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self((dollars * 100.0).round() as i64))
    }
}

impl UsdAmount {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Converts a decimal dollar amount to minor units, truncating toward zero.
    pub fn from_dollars(dollars: f64) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        Self((dollars * 100.0).trunc() as i64)
    }

    pub fn to_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = UsdAmount::from(1_000);
        let b = UsdAmount::from(250);
        assert_eq!(a + b, UsdAmount::from(1_250));
        assert_eq!(a - b, UsdAmount::from(750));
        assert_eq!(-b, UsdAmount::from(-250));
        assert_eq!(b * 4, a);
        let total: UsdAmount = [a, b, b].into_iter().sum();
        assert_eq!(total, UsdAmount::from(1_500));
    }

    #[test]
    fn display_as_dollars() {
        assert_eq!(UsdAmount::from(1_999).to_string(), "$19.99");
        assert_eq!(UsdAmount::from(5).to_string(), "$0.05");
        assert_eq!(UsdAmount::from(-250).to_string(), "-$2.50");
    }

    #[test]
    fn serde_round_trip_in_dollars() {
        let amount: UsdAmount = serde_json::from_str("19.99").unwrap();
        assert_eq!(amount, UsdAmount::from(1_999));
        assert_eq!(serde_json::to_string(&amount).unwrap(), "19.99");
        let whole: UsdAmount = serde_json::from_str("25").unwrap();
        assert_eq!(whole, UsdAmount::from(2_500));
    }

    #[test]
    fn from_dollars_truncates() {
        // 19.99 * 100 is 1998.99… in ieee754, so truncation drops a cent. The payment processor
        // conversion relies on exactly this.
        assert_eq!(UsdAmount::from_dollars(19.99), UsdAmount::from(1_998));
        assert_eq!(UsdAmount::from_dollars(25.0), UsdAmount::from(2_500));
        assert_eq!(UsdAmount::from_dollars(0.5), UsdAmount::from(50));
    }
}
