use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops;

use crate::error::{Error, Result};

/// Runtime value representation
///
/// Every calclang value is a 64-bit float. Integral values print without a
/// fractional part, so `3 + 4` shows as `7`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(f64);

impl Value {
    /// Wraps a raw number
    pub fn new(n: f64) -> Self {
        Value(n)
    }

    /// Passes finite values through; infinities and NaN are an overflow
    pub fn ensure_finite(self) -> Result<Value> {
        if self.0.is_finite() {
            Ok(self)
        } else {
            Err(Error::NumericOverflow)
        }
    }

    /// Division, failing on a zero divisor
    pub fn checked_div(self, rhs: Value) -> Result<Value> {
        if rhs.0 == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Value(self.0 / rhs.0))
    }
}

impl ops::Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl ops::Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl ops::Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        Value(self.0 * rhs.0)
    }
}

impl ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // f64 Display never uses exponent notation and drops `.0`;
        // only -0 needs folding
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_display() {
        assert_eq!(Value::new(7.0).to_string(), "7");
        assert_eq!(Value::new(-5.0).to_string(), "-5");
        assert_eq!(Value::new(1e21).to_string(), "1000000000000000000000");
    }

    #[test]
    fn test_fractional_display() {
        assert_eq!(Value::new(2.5).to_string(), "2.5");
        assert_eq!(Value::new(-0.125).to_string(), "-0.125");
    }

    #[test]
    fn test_negative_zero_display() {
        assert_eq!((-Value::new(0.0)).to_string(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Value::new(6.0);
        let b = Value::new(4.0);
        assert_eq!(a + b, Value::new(10.0));
        assert_eq!(a - b, Value::new(2.0));
        assert_eq!(a * b, Value::new(24.0));
        assert_eq!(a.checked_div(b).unwrap(), Value::new(1.5));
        assert_eq!(-a, Value::new(-6.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Value::new(1.0).checked_div(Value::new(0.0)),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            Value::new(1.0).checked_div(Value::new(-0.0)),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(Value::new(1e308).ensure_finite(), Ok(Value::new(1e308)));
        assert_eq!(
            Value::new(f64::INFINITY).ensure_finite(),
            Err(Error::NumericOverflow)
        );
        assert_eq!(
            (-Value::new(f64::INFINITY)).ensure_finite(),
            Err(Error::NumericOverflow)
        );
        assert_eq!(Value::new(f64::NAN).ensure_finite(), Err(Error::NumericOverflow));
    }
}
