//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Round a f64 and clamp it to the i64 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).round();
    cast::<f64, i64>(clamped).unwrap_or(0)
}

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    cast::<i64, f64>(value).unwrap_or(0.0)
}

/// Round `value` to the nearest multiple of `step`; half steps round up.
///
/// A non-positive step leaves the value rounded to the nearest integer.
#[must_use]
pub fn round_to_step(value: f64, step: i64) -> i64 {
    if step <= 0 {
        return round_f64_to_i64(value);
    }
    let step_f = i64_to_f64(step);
    round_f64_to_i64(value / step_f).saturating_mul(step)
}

/// Narrow a `usize` into `u32`, saturating on overflow.
#[must_use]
pub fn usize_to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounders_cover_ranges() {
        assert_eq!(round_f64_to_i64(1.6), 2);
        assert_eq!(round_f64_to_i64(f64::NAN), 0);
        assert_eq!(round_f64_to_i64(f64::INFINITY), 0);
        assert_eq!(round_f64_to_i64(-2.4), -2);
    }

    #[test]
    fn step_rounding_snaps_to_multiples() {
        assert_eq!(round_to_step(7_524.9, 50), 7_500);
        assert_eq!(round_to_step(7_525.0, 50), 7_550);
        assert_eq!(round_to_step(11_990.0, 50), 12_000);
        assert_eq!(round_to_step(42.4, 0), 42);
    }

    #[test]
    fn usize_narrowing_saturates() {
        assert_eq!(usize_to_u32(7), 7);
        assert_eq!(usize_to_u32(usize::MAX), u32::MAX);
    }
}
