use crate::{Error, Number, Result, value_error};
use bigdecimal::BigDecimal;
use std::{fmt, ops, str::FromStr};

/// An arbitrary-precision number
///
/// `Decimal` holds values that don't fit in a machine word, e.g. a googol.
/// There's no implicit conversion between [Number] and `Decimal` in either
/// direction; callers opt into the precision they want at each boundary.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// Returns true if the value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }

    /// Returns a reference to the underlying [BigDecimal]
    pub fn inner(&self) -> &BigDecimal {
        &self.0
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match BigDecimal::from_str(s) {
            Ok(value) => Ok(Self(value)),
            Err(_) => value_error!("unable to parse '{s}' as a decimal"),
        }
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl TryFrom<Number> for Decimal {
    type Error = Error;

    fn try_from(number: Number) -> Result<Self> {
        match number {
            Number::Int(n) => Ok(Self::from(n)),
            Number::Float(n) => match BigDecimal::try_from(n) {
                Ok(value) => Ok(Self(value)),
                Err(_) => value_error!("'{n}' has no decimal representation"),
            },
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! decimal_op {
    ($trait:ident, $fn:ident, $op:tt) => {
        impl ops::$trait for Decimal {
            type Output = Decimal;

            fn $fn(self, other: Decimal) -> Decimal {
                Decimal(&self.0 $op &other.0)
            }
        }

        impl ops::$trait for &Decimal {
            type Output = Decimal;

            fn $fn(self, other: &Decimal) -> Decimal {
                Decimal(&self.0 $op &other.0)
            }
        }
    };
}

decimal_op!(Add, add, +);
decimal_op!(Sub, sub, -);
decimal_op!(Mul, mul, *);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_googol_survives_a_display_round_trip() {
        let googol = format!("1{}", "0".repeat(100));
        let parsed = Decimal::from_str(&googol).unwrap();
        assert_eq!(parsed.to_string(), googol);
    }

    #[test]
    fn arithmetic_and_ordering() {
        let a = Decimal::from(1000);
        let b = Decimal::from(2000);

        assert_eq!(&a + &b, Decimal::from(3000));
        assert_eq!(&b - &a, Decimal::from(1000));
        assert_eq!(&a * &b, Decimal::from(2_000_000));
        assert!(a < b);
        assert!(Decimal::from(0).is_zero());
    }

    #[test]
    fn floats_convert_only_when_finite() {
        assert!(Decimal::try_from(Number::Float(1.5)).is_ok());
        assert!(Decimal::try_from(Number::Float(f64::NAN)).is_err());
    }
}
