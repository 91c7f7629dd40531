// Rate arithmetic for the playback clock.

use crate::engine::config::{MAX_WPM, MIN_WPM};

/// Converts a reading rate to the delay between word advancements.
///
/// The divisor is guarded so a bad rate can never produce a zero delay and
/// spin the loop.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    60_000 / u64::from(wpm.max(1))
}

/// Clamps a requested rate into the supported range.
///
/// Returns `None` for zero: a zero rate is rejected outright rather than
/// silently promoted, so the caller leaves the current rate untouched.
pub fn clamp_wpm(wpm: u32) -> Option<u32> {
    if wpm == 0 {
        None
    } else {
        Some(wpm.clamp(MIN_WPM, MAX_WPM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_to_milliseconds_300() {
        // 300 WPM = 200ms per word (60,000 / 300 = 200)
        assert_eq!(wpm_to_milliseconds(300), 200);
    }

    #[test]
    fn test_wpm_to_milliseconds_600() {
        // 600 WPM = 100ms per word (60,000 / 600 = 100)
        assert_eq!(wpm_to_milliseconds(600), 100);
    }

    #[test]
    fn test_wpm_to_milliseconds_60() {
        assert_eq!(wpm_to_milliseconds(60), 1000);
    }

    #[test]
    fn test_wpm_to_milliseconds_zero_guard() {
        // Never a zero delay, even for an out-of-contract rate
        assert_eq!(wpm_to_milliseconds(0), 60_000);
    }

    #[test]
    fn test_clamp_wpm_in_range() {
        assert_eq!(clamp_wpm(300), Some(300));
    }

    #[test]
    fn test_clamp_wpm_below_minimum() {
        assert_eq!(clamp_wpm(10), Some(MIN_WPM));
    }

    #[test]
    fn test_clamp_wpm_above_maximum() {
        assert_eq!(clamp_wpm(5000), Some(MAX_WPM));
    }

    #[test]
    fn test_clamp_wpm_rejects_zero() {
        assert_eq!(clamp_wpm(0), None);
    }
}
