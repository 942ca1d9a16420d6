//! # Stream-style Decimal Rendering
//!
//! Default stream output of a floating-point value uses the shortest of fixed and
//! scientific notation at six significant digits, then strips trailing zeros.
//! Rust's `{}` prints the exact shortest round-trip representation instead, which
//! leaks rounding noise such as `550.0000000000001`. [`Decimal`] closes that gap.

use std::fmt;

/// Significant digits used by default stream formatting.
pub const PRECISION: usize = 6;

/// Wrapper that formats an `f64` with `%g` semantics at [`PRECISION`] digits.
///
/// ```
/// use print_support::Decimal;
///
/// assert_eq!(Decimal(2035.0000000000002).to_string(), "2035");
/// assert_eq!(Decimal(3.14159265).to_string(), "3.14159");
/// assert_eq!(Decimal(1.0e-5).to_string(), "1e-05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimal(pub f64);

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Round to PRECISION significant digits first; the exponent of the rounded
        // value decides between fixed and scientific notation.
        let scientific = format!("{:.*e}", PRECISION - 1, value);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_drop_fraction() {
        assert_eq!(Decimal(500.0).to_string(), "500");
        assert_eq!(Decimal(1500.0).to_string(), "1500");
        assert_eq!(Decimal(16.0).to_string(), "16");
    }

    #[test]
    fn test_rounding_noise_is_hidden() {
        assert_eq!(Decimal(500.0 * 1.1).to_string(), "550");
        assert_eq!(Decimal(500.0 * 1.1 + 1500.0 * 0.9 * 1.1).to_string(), "2035");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(Decimal(18.849539999).to_string(), "18.8495");
        assert_eq!(Decimal(0.5).to_string(), "0.5");
        assert_eq!(Decimal(-3.25).to_string(), "-3.25");
    }

    #[test]
    fn test_scientific_switch() {
        assert_eq!(Decimal(1234567.0).to_string(), "1.23457e+06");
        assert_eq!(Decimal(100000.0).to_string(), "100000");
        assert_eq!(Decimal(0.0001).to_string(), "0.0001");
        assert_eq!(Decimal(0.00001234).to_string(), "1.234e-05");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(Decimal(0.0).to_string(), "0");
        assert_eq!(Decimal(-0.0).to_string(), "-0");
        assert_eq!(Decimal(f64::INFINITY).to_string(), "inf");
        assert_eq!(Decimal(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Decimal(f64::NAN).to_string(), "nan");
    }
}
