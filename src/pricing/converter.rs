//! Unit conversion and rounding
//!
//! Everything is normalized to kilograms before prices and quantities are
//! multiplied together.

use crate::models::Unit;

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;

/// Convert a weight into kilograms
///
/// Examples:
/// - (3.0, kg) -> 3.0
/// - (400.0, g) -> 0.4
pub fn normalize_weight(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Kg => value,
        Unit::G => value / G_PER_KG,
    }
}

/// Convert a per-unit price into a per-kilogram price
///
/// Scales opposite to [`normalize_weight`]: a price per gram is multiplied by
/// 1000 to become a price per kilogram.
pub fn normalize_price(price: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Kg => price,
        Unit::G => price * G_PER_KG,
    }
}

/// Snap a whole number of cents onto the 5-cent grid
///
/// | last digit | result                      |
/// |------------|-----------------------------|
/// | 0, 5       | unchanged                   |
/// | 1, 2       | down to the decile          |
/// | 3, 4, 6, 7 | decile + 5                  |
/// | 8, 9       | up to the next decile       |
///
/// Works in `f64` so totals beyond the `i64` range keep their magnitude.
/// Non-finite input is returned as is.
pub fn snap_cents(cents: f64) -> f64 {
    if !cents.is_finite() {
        return cents;
    }

    // Euclidean remainder keeps negative amounts in 0..10
    let last_digit = cents.rem_euclid(10.0);
    let decile = cents - last_digit;
    match last_digit as u8 {
        0 | 5 => cents,
        1 | 2 => decile,
        3 | 4 | 6 | 7 => decile + 5.0,
        _ => decile + 10.0,
    }
}

/// Round a monetary amount to a multiple of 0.05 using [`snap_cents`]
pub fn precise_round(value: f64) -> f64 {
    let cents = (value * 100.0).round();
    snap_cents(cents) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_weight() {
        assert_eq!(normalize_weight(3.0, Unit::Kg), 3.0);
        assert!((normalize_weight(400.0, Unit::G) - 0.4).abs() < 1e-12);
        assert_eq!(normalize_weight(0.0, Unit::G), 0.0);
    }

    #[test]
    fn test_normalize_price_exact() {
        for p in [0.0, 0.06, 1.45, 1.78, 2.35, 9.10, 123.456] {
            assert_eq!(normalize_price(p, Unit::Kg), p);
            assert_eq!(normalize_price(p, Unit::G), p * 1000.0);
        }
    }

    #[test]
    fn test_normalize_price_is_not_inverse_of_itself() {
        // Prices only scale upward; there is no way back through normalize_price.
        let p = 2.35;
        let once = normalize_price(p, Unit::G);
        assert_eq!(normalize_price(once, Unit::Kg), once);
        assert!((once - 2350.0).abs() < 1e-9);
    }

    #[test]
    fn test_snap_cents_table() {
        // 37460..=37469 covers every last digit once.
        let expected = [
            37460, 37460, 37460, 37465, 37465, 37465, 37465, 37465, 37470, 37470,
        ];
        for digit in 0..10 {
            let cents = (37460 + digit) as f64;
            assert_eq!(snap_cents(cents), expected[digit] as f64, "digit {}", digit);
        }
    }

    #[test]
    fn test_snap_cents_negative_stays_on_grid() {
        assert_eq!(snap_cents(-11.0), -10.0);
        assert_eq!(snap_cents(-14.0), -15.0);
        assert_eq!(snap_cents(-19.0), -20.0);
        assert_eq!(snap_cents(-20.0), -20.0);
        assert_eq!(precise_round(-1.23), -1.25);
    }

    #[test]
    fn test_snap_cents_beyond_i64_range() {
        // 2^70 cents is far past i64::MAX; the result must not clamp or wrap
        let cents = 2f64.powi(70);
        let snapped = snap_cents(cents);
        assert!(((snapped - cents) / cents).abs() < 1e-15);

        let snapped = snap_cents(-cents);
        assert!(((snapped + cents) / cents).abs() < 1e-15);
    }

    #[test]
    fn test_precise_round_large_exact_cents() {
        // Below 2^53 cents every cent is representable, so the table still applies exactly
        assert_eq!(precise_round(123_456_789_012.34), 123_456_789_012.35);
        assert_eq!(precise_round(-123_456_789_012.34), -123_456_789_012.35);
        assert_eq!(precise_round(50_000_000_000_000.01), 50_000_000_000_000.0);
        assert_eq!(precise_round(90_000_000_000_000.08), 90_000_000_000_000.1);
    }

    #[test]
    fn test_precise_round_large_values_keep_magnitude() {
        for value in [1.45e20, -1.45e20, 9.2e16, -9.3e18, 1e300] {
            let rounded = precise_round(value);
            assert!(rounded.is_finite());
            assert!(((rounded - value) / value).abs() < 1e-12, "value {}", value);
        }
    }

    #[test]
    fn test_snap_cents_non_finite_passthrough() {
        assert_eq!(snap_cents(f64::INFINITY), f64::INFINITY);
        assert!(snap_cents(f64::NAN).is_nan());
    }

    #[test]
    fn test_precise_round_examples() {
        assert_eq!(precise_round(374.65), 374.65);
        assert_eq!(precise_round(805.64), 805.65);
        assert_eq!(precise_round(1.01), 1.0);
        assert_eq!(precise_round(1.02), 1.0);
        assert_eq!(precise_round(1.03), 1.05);
        assert_eq!(precise_round(1.07), 1.05);
        assert_eq!(precise_round(1.08), 1.1);
        assert_eq!(precise_round(1.09), 1.1);
        assert_eq!(precise_round(0.0), 0.0);
    }

    #[test]
    fn test_precise_round_sub_cent_input() {
        // 2.004 -> 200 cents, 2.006 -> 201 cents -> 200
        assert_eq!(precise_round(2.004), 2.0);
        assert_eq!(precise_round(2.006), 2.0);
        // 2.026 -> 203 cents -> 205
        assert_eq!(precise_round(2.026), 2.05);
    }

    #[test]
    fn test_precise_round_idempotent_and_on_grid() {
        for cents in -2000i64..2000 {
            let x = cents as f64 / 100.0 + 0.003;
            let once = precise_round(x);
            assert_eq!(precise_round(once), once, "x = {}", x);

            let snapped = (once * 100.0).round();
            assert_eq!(snapped.rem_euclid(5.0), 0.0, "x = {}", x);
            assert!((once * 100.0 - snapped).abs() < 1e-6);
        }
    }
}
