//! # Money Conversion
//!
//! Major/minor unit conversion for amounts sent to the payment provider.
//! Razorpay transmits all supported currencies in hundredths (paise for
//! INR, cents for USD), so the conversion factor is a flat 100.

/// Convert a major-unit amount to the provider's minor unit
/// (e.g., 10.00 INR -> 1000 paise). Rounds half away from zero.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Convert from minor units back to a major-unit decimal
/// (e.g., 1000 paise -> 10.00 INR).
pub fn to_major_units(amount: i64) -> f64 {
    amount as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_unit_conversion() {
        assert_eq!(to_minor_units(10.0), 1000);
        assert_eq!(to_minor_units(1.0), 100);
        assert_eq!(to_minor_units(10.99), 1099);
        assert_eq!(to_minor_units(499.50), 49950);
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.005 major units sits exactly between two paise
        assert_eq!(to_minor_units(1.005), 101);
        assert_eq!(to_minor_units(1.004), 100);
    }

    #[test]
    fn test_major_unit_conversion() {
        assert_eq!(to_major_units(1000), 10.0);
        assert_eq!(to_major_units(1099), 10.99);
        assert_eq!(to_major_units(1), 0.01);
    }

    #[test]
    fn test_round_trip() {
        for amount in [1.0, 10.0, 250.75, 99999.99] {
            assert_eq!(to_major_units(to_minor_units(amount)), amount);
        }
    }
}
