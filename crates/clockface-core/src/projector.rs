//! Angle projection for the radial dial.
//!
//! Pure conversions from time-of-day to angular coordinates. Degrees grow
//! clockwise from the 12 o'clock position; mapping to a toolkit's drawing
//! coordinates (offset from 90 degrees, negated extent) is the renderer's
//! concern, as is clipping extents that exceed 360.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::schedule::Mode;

/// An arc on the dial: start angle plus clockwise extent, in degrees.
///
/// `start_deg` is always in `[0, 360)`. `extent_deg` is not clipped and
/// exceeds 360 for durations longer than one full period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpan {
    pub start_deg: f64,
    pub extent_deg: f64,
}

impl ArcSpan {
    /// End angle of the arc, in unwrapped degrees (may exceed 360).
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.extent_deg
    }

    /// Whether `now_deg` falls inside this arc, by plain degree comparison.
    ///
    /// Does not wrap: an arc whose extent crosses the 360 -> 0 boundary
    /// reads as inactive once `now_deg` wraps past zero. Known limitation,
    /// kept as-is.
    pub fn contains(&self, now_deg: f64) -> bool {
        self.start_deg <= now_deg && now_deg <= self.end_deg()
    }
}

/// Project a time-of-day plus duration onto the dial.
pub fn to_angle(hour: u32, minute: u32, second: u32, duration_minutes: i64, mode: Mode) -> ArcSpan {
    let period = mode.period_seconds() as f64;
    let start_seconds = (hour * 3600 + minute * 60 + second) as f64;

    ArcSpan {
        start_deg: (start_seconds / period * 360.0).rem_euclid(360.0),
        extent_deg: (duration_minutes * 60) as f64 / period * 360.0,
    }
}

/// Current wall-clock needle angle, in degrees.
pub fn now_angle(mode: Mode) -> f64 {
    let now = Local::now();
    to_angle(now.hour(), now.minute(), now.second(), 0, mode).start_deg
}

/// Zero-padded `(HH, MM, SS)` strings for the digital clock.
///
/// Two-digit padding only; callers are expected to pass values below 100.
pub fn format_clock(hour: u32, minute: u32, second: u32) -> (String, String, String) {
    (
        format!("{hour:02}"),
        format!("{minute:02}"),
        format!("{second:02}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_is_zero_in_both_modes() {
        assert_eq!(to_angle(0, 0, 0, 0, Mode::TwentyFourHour).start_deg, 0.0);
        assert_eq!(to_angle(0, 0, 0, 0, Mode::TwelveHour).start_deg, 0.0);
    }

    #[test]
    fn noon_placement_depends_on_mode() {
        // Half a revolution on the 24h dial, a full wrap back to 0 on 12h.
        assert_eq!(to_angle(12, 0, 0, 0, Mode::TwentyFourHour).start_deg, 180.0);
        assert_eq!(to_angle(12, 0, 0, 0, Mode::TwelveHour).start_deg, 0.0);
    }

    #[test]
    fn start_angle_stays_in_range() {
        for hour in 0..24 {
            for minute in (0..60).step_by(7) {
                for mode in [Mode::TwentyFourHour, Mode::TwelveHour] {
                    let arc = to_angle(hour, minute, 59, 0, mode);
                    assert!(arc.start_deg >= 0.0 && arc.start_deg < 360.0);
                }
            }
        }
    }

    #[test]
    fn extent_scales_with_duration() {
        // 60 minutes = 15 degrees on the 24h dial, 30 on the 12h dial.
        let day = to_angle(9, 0, 0, 60, Mode::TwentyFourHour).extent_deg;
        let half_day = to_angle(9, 0, 0, 60, Mode::TwelveHour).extent_deg;
        assert!((day - 15.0).abs() < 1e-9);
        assert!((half_day - 30.0).abs() < 1e-9);
    }

    #[test]
    fn extent_is_not_clipped() {
        let arc = to_angle(0, 0, 0, 2000, Mode::TwelveHour);
        assert!(arc.extent_deg > 360.0);
    }

    #[test]
    fn contains_is_a_plain_range_check() {
        let arc = ArcSpan {
            start_deg: 100.0,
            extent_deg: 50.0,
        };
        assert!(arc.contains(100.0));
        assert!(arc.contains(125.0));
        assert!(arc.contains(150.0));
        assert!(!arc.contains(99.9));
        assert!(!arc.contains(150.1));
    }

    #[test]
    fn contains_does_not_wrap_past_midnight() {
        // 23:20 + 95 min on the 24h dial ends past 360; a needle at 0:30
        // (7.5 degrees) sits inside the event in real time but the plain
        // comparison misses it.
        let arc = to_angle(23, 20, 0, 95, Mode::TwentyFourHour);
        assert!(arc.end_deg() > 360.0);
        assert!(!arc.contains(7.5));
    }

    #[test]
    fn clock_strings_are_zero_padded() {
        assert_eq!(
            format_clock(7, 5, 0),
            ("07".to_string(), "05".to_string(), "00".to_string())
        );
        assert_eq!(
            format_clock(23, 59, 59),
            ("23".to_string(), "59".to_string(), "59".to_string())
        );
    }
}
