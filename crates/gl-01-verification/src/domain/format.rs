//! Number rendering for hashed payloads and consensus reasons
//!
//! Attestation payloads and stored reason strings were produced by an
//! ECMA-262 runtime, so numbers must render with its layout to keep hashes
//! and messages stable.

/// Render `x` with ECMA-262 `Number::toString` layout: shortest round-trip
/// digits, plain notation for `1e-7 < |x| < 1e21`, exponent notation with an
/// explicit sign otherwise (`1e+21`, `1.5e-7`).
///
/// Returns `None` for NaN and infinities.
pub fn format_number(x: f64) -> Option<String> {
    if !x.is_finite() {
        return None;
    }
    if x == 0.0 {
        return Some("0".to_string());
    }

    let sign = if x < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits: `1.2345e20`, `1e-6`.
    let scientific = format!("{:e}", x.abs());
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{e_sign}{}", e.unsigned_abs())
        } else {
            format!("{first}.{rest}e{e_sign}{}", e.unsigned_abs())
        }
    };

    Some(format!("{sign}{body}"))
}

/// One decimal place, with exact ties rounded away from zero
/// (`72.25 → "72.3"`). `{:.1}` alone would round such ties to even.
pub fn format_fixed_1(x: f64) -> String {
    let magnitude = x.abs();
    if !x.is_finite() || magnitude >= 1e21 {
        return format_number(x).unwrap_or_else(|| x.to_string());
    }

    // Only fractional parts .25 and .75 are exact ties at one decimal.
    let exact_tie = (magnitude * 4.0).fract() == 0.0 && (magnitude * 2.0).fract() != 0.0;
    if !exact_tie {
        return format!("{x:.1}");
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let tenths = (magnitude * 10.0).ceil();
    format!("{sign}{:.1}", tenths / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_render_without_fraction() {
        assert_eq!(format_number(100.0).unwrap(), "100");
        assert_eq!(format_number(-42.0).unwrap(), "-42");
        assert_eq!(format_number(0.0).unwrap(), "0");
        assert_eq!(format_number(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_plain_notation_range() {
        assert_eq!(format_number(250.5).unwrap(), "250.5");
        assert_eq!(format_number(0.1).unwrap(), "0.1");
        assert_eq!(format_number(0.000001).unwrap(), "0.000001");
        assert_eq!(format_number(1e17).unwrap(), "100000000000000000");
        assert_eq!(
            format_number(1.2345678901234568e20).unwrap(),
            "123456789012345680000"
        );
        assert_eq!(format_number(9_007_199_254_740_993.0).unwrap(), "9007199254740992");
    }

    #[test]
    fn test_exponent_notation_outside_range() {
        assert_eq!(format_number(1e21).unwrap(), "1e+21");
        assert_eq!(format_number(1.5e21).unwrap(), "1.5e+21");
        assert_eq!(format_number(1e-7).unwrap(), "1e-7");
        assert_eq!(format_number(-2.5e-8).unwrap(), "-2.5e-8");
    }

    #[test]
    fn test_non_finite_has_no_rendering() {
        assert!(format_number(f64::NAN).is_none());
        assert!(format_number(f64::INFINITY).is_none());
    }

    #[test]
    fn test_fixed_ties_round_away_from_zero() {
        assert_eq!(format_fixed_1(72.25), "72.3");
        assert_eq!(format_fixed_1(72.75), "72.8");
        assert_eq!(format_fixed_1(-72.25), "-72.3");
        assert_eq!(format_fixed_1(0.25), "0.3");
    }

    #[test]
    fn test_fixed_non_ties() {
        assert_eq!(format_fixed_1(55.3), "55.3");
        assert_eq!(format_fixed_1(93.935), "93.9");
        assert_eq!(format_fixed_1(18.0), "18.0");
        // 0.15 is stored just below the tie.
        assert_eq!(format_fixed_1(0.15), "0.1");
    }
}
