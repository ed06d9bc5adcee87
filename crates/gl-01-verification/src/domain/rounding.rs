//! Rounding helpers.
//!
//! Stored scores and attestation hashes round halves toward positive
//! infinity (`-2.5 → -2`), unlike `f64::round`. Changing this changes
//! every persisted hash.

/// Round to the nearest integer, halves toward +∞.
pub fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place.
pub fn round_1dp(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}

/// Round to the nearest integer and convert.
pub fn round_to_i64(x: f64) -> i64 {
    round_half_up(x) as i64
}
