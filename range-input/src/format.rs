//! Display formatting for slider values.
//!
//! Values are rendered with a fixed number of fractional digits, a comma
//! thousands separator in the integer part and optional prefix/postfix text.
//! Formatting is locale independent.

/// Renders `value` as `prefix + grouped number + postfix`.
///
/// Rounding is half away from zero. A value that rounds to zero is printed
/// without a sign.
///
/// # Examples
///
/// ```
/// use range_input::format_value;
///
/// assert_eq!(format_value(1234567.891, 2, "$", ""), "$1,234,567.89");
/// assert_eq!(format_value(-1500.0, 0, "", " m"), "-1,500 m");
/// ```
pub fn format_value(value: f64, decimals: usize, prefix: &str, postfix: &str) -> String {
    let fixed = to_fixed(value, decimals);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let capacity = prefix.len() + fixed.len() + fixed.len() / 3 + postfix.len();
    let mut out = String::with_capacity(capacity);
    out.push_str(prefix);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out.push_str(postfix);
    out
}

/// Fixed-point rendering of the exact stored value, rounding half away from
/// zero.
///
/// `4.35` is stored as `4.34999..`, so one decimal gives `"4.3"`. Exact ties
/// such as `2.5` or `0.125` round up in magnitude.
fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    let exact_digits = exact_fraction_digits(magnitude);

    let body = if exact_digits <= decimals {
        // Padding only, nothing to round.
        format!("{magnitude:.decimals$}")
    } else {
        let exact = format!("{magnitude:.exact_digits$}");
        let cut = match exact.find('.') {
            Some(point) if decimals == 0 => point,
            Some(point) => point + 1 + decimals,
            None => exact.len(),
        };
        let round_up = exact.as_bytes().get(cut + usize::from(decimals == 0)) >= Some(&b'5');
        let mut kept = exact[..cut].to_string();
        if round_up {
            kept = increment_decimal(&kept);
        }
        kept
    };

    let is_zero = body.bytes().all(|b| b == b'0' || b == b'.');
    if negative && !is_zero {
        format!("-{body}")
    } else {
        body
    }
}

/// Number of fractional decimal digits in the exact expansion of a finite
/// `f64`. Every binary fraction terminates in decimal.
fn exact_fraction_digits(magnitude: f64) -> usize {
    let bits = magnitude.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };
    if mantissa == 0 {
        return 0;
    }
    let exponent = exponent + mantissa.trailing_zeros() as i32;
    if exponent >= 0 { 0 } else { exponent.unsigned_abs() as usize }
}

/// Adds one unit in the last place of a plain decimal string.
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut index = bytes.len();
    while index > 0 {
        index -= 1;
        match bytes[index] {
            b'.' => {}
            b'9' => bytes[index] = b'0',
            _ => {
                bytes[index] += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    bytes.insert(0, b'1');
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Inserts a comma between every group of three digits, counted from the
/// right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reparse(formatted: &str, prefix: &str, postfix: &str) -> f64 {
        formatted
            .strip_prefix(prefix)
            .and_then(|s| s.strip_suffix(postfix))
            .map(|s| s.replace(',', ""))
            .and_then(|s| s.parse().ok())
            .unwrap_or(f64::NAN)
    }

    #[test]
    fn groups_integer_part_only() {
        assert_eq!(format_value(1234.5678, 3, "", ""), "1,234.568");
        assert_eq!(format_value(999.0, 0, "", ""), "999");
        assert_eq!(format_value(1000.0, 0, "", ""), "1,000");
        assert_eq!(format_value(123456.0, 0, "", ""), "123,456");
        assert_eq!(format_value(1234567.0, 0, "", ""), "1,234,567");
    }

    #[test]
    fn pads_fractional_digits() {
        assert_eq!(format_value(5.0, 2, "", ""), "5.00");
        assert_eq!(format_value(0.05, 2, "", ""), "0.05");
        assert_eq!(format_value(12.3, 1, "", ""), "12.3");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_value(2.5, 0, "", ""), "3");
        assert_eq!(format_value(-2.5, 0, "", ""), "-3");
        assert_eq!(format_value(0.125, 2, "", ""), "0.13");
    }

    #[test]
    fn wraps_prefix_and_postfix() {
        assert_eq!(format_value(45.0, 0, "", ""), "45");
        assert_eq!(format_value(2500.0, 0, "$", "/mo"), "$2,500/mo");
    }

    #[test]
    fn negative_values_keep_sign_outside_grouping() {
        assert_eq!(format_value(-1234.0, 0, "", ""), "-1,234");
        assert_eq!(format_value(-123.0, 0, "", ""), "-123");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_value(-0.0001, 2, "", ""), "0.00");
        assert_eq!(format_value(-0.0, 0, "", ""), "0");
    }

    #[test]
    fn high_precision_pads_exact_values() {
        assert_eq!(format_value(1.5, 17, "", ""), "1.50000000000000000");
    }

    #[test]
    fn rounds_the_stored_value_not_its_shortest_form() {
        // 4.35 and 1.005 are stored just below their decimal midpoints.
        assert_eq!(format_value(4.35, 1, "", ""), "4.3");
        assert_eq!(format_value(1.005, 2, "", ""), "1.00");
        assert_eq!(format_value(-4.35, 1, "", ""), "-4.3");
    }

    #[test]
    fn large_ties_round_away_from_zero() {
        // Exactly representable, so this is a true tie at two decimals.
        assert_eq!(
            format_value(100_000_000_000_000.125, 2, "", ""),
            "100,000,000,000,000.13"
        );
        assert_eq!(format_value(-0.5, 0, "", ""), "-1");
        assert_eq!(
            format_value(9_007_199_254_740_992.0, 0, "", ""),
            "9,007,199,254,740,992"
        );
    }

    #[test]
    fn carry_propagates_into_integer_part() {
        assert_eq!(format_value(9.995, 2, "", ""), "9.99");
        assert_eq!(format_value(9.996, 2, "", ""), "10.00");
        assert_eq!(format_value(999.5, 0, "", ""), "1,000");
        assert_eq!(format_value(0.96, 1, "", ""), "1.0");
    }

    #[test]
    fn tiny_magnitudes_round_to_unsigned_zero() {
        assert_eq!(format_value(5e-324, 3, "", ""), "0.000");
        assert_eq!(format_value(-5e-324, 0, "", ""), "0");
    }

    #[test]
    fn reparse_recovers_rounded_value() {
        for &(value, decimals) in &[(1234.5678, 2), (0.1, 1), (98765.4321, 3), (-42.0, 0)] {
            let formatted = format_value(value, decimals, "€", "%");
            let factor = 10f64.powi(decimals as i32);
            let expected = (value * factor).round() / factor;
            assert!((reparse(&formatted, "€", "%") - expected).abs() < 1e-9);
        }
    }
}

/// Property-based checks of the label format.
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Stripping the affixes and commas recovers the value to the
        /// requested precision.
        #[test]
        fn reparse_is_within_half_unit(value in -1e9f64..1e9, decimals in 0usize..=6) {
            let formatted = format_value(value, decimals, "$", " kg");
            let digits = formatted
                .strip_prefix('$')
                .and_then(|s| s.strip_suffix(" kg"))
                .map(|s| s.replace(',', ""));
            prop_assert!(digits.is_some(), "affixes lost in {}", formatted);
            let reparsed: f64 = digits.unwrap_or_default().parse().unwrap_or(f64::NAN);
            let half_unit = 0.5 * 10f64.powi(-(decimals as i32));
            prop_assert!(
                (reparsed - value).abs() <= half_unit + 1e-9 * value.abs().max(1.0),
                "{} reparsed as {}", value, reparsed
            );
        }

        /// Exactly `decimals` fractional digits, and groups of three in the
        /// integer part.
        #[test]
        fn shape_matches_precision(value in -1e12f64..1e12, decimals in 0usize..=8) {
            let formatted = format_value(value, decimals, "", "");
            let unsigned = formatted.strip_prefix('-').unwrap_or(&formatted);
            let (int_part, frac_part) = match unsigned.split_once('.') {
                Some((int_part, frac_part)) => (int_part, frac_part),
                None => (unsigned, ""),
            };
            prop_assert_eq!(frac_part.len(), decimals);
            let groups: Vec<&str> = int_part.split(',').collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            prop_assert!(groups[1..].iter().all(|g| g.len() == 3));
        }
    }
}
