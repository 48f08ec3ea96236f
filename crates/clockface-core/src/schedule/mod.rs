//! Event model for the radial schedule.
//!
//! Events are caller-supplied and immutable for the duration of a layout
//! pass. Everything the layout derives (timecode, track, angles) lives on
//! the plan items produced by the `layout` module, never on the event
//! itself.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};

/// Dial mode: how many hours one full revolution represents.
///
/// The mode is the one externally meaningful switch. It selects the period
/// length used for all angle and slot math; event times are always given
/// as 24-hour time-of-day regardless of mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
}

impl Mode {
    /// Hours in one full revolution of the dial.
    pub fn period_hours(&self) -> u32 {
        match self {
            Mode::TwentyFourHour => 24,
            Mode::TwelveHour => 12,
        }
    }

    /// Minutes in one full revolution.
    pub fn period_minutes(&self) -> u32 {
        self.period_hours() * 60
    }

    /// Seconds in one full revolution.
    pub fn period_seconds(&self) -> u32 {
        self.period_hours() * 3600
    }

    /// Number of 5-minute occupancy slots on the dial (12 per hour).
    pub fn slot_count(&self) -> usize {
        (self.period_hours() * 12) as usize
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::TwentyFourHour => write!(f, "24h"),
            Mode::TwelveHour => write!(f, "12h"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24" | "24h" => Ok(Mode::TwentyFourHour),
            "12" | "12h" => Ok(Mode::TwelveHour),
            other => Err(ValidationError::InvalidValue {
                field: "mode".to_string(),
                message: format!("expected '12h' or '24h', got '{other}'"),
            }),
        }
    }
}

/// A time-bounded event to place on the dial.
///
/// `duration_minutes` may exceed the minutes remaining in the day, in which
/// case the event wraps past midnight. Seconds are not modeled for events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier, unique within the event set.
    pub id: String,
    /// Display label. Has no algorithmic meaning.
    pub name: String,
    pub start_hour: u32,
    pub start_minute: u32,
    pub duration_minutes: i64,
    /// Opaque display color (`#rrggbb`), passed through unchanged.
    pub color: String,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_hour: u32,
        start_minute: u32,
        duration_minutes: i64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_hour,
            start_minute,
            duration_minutes,
            color: color.into(),
        }
    }

    /// Check the defensive field contracts.
    ///
    /// Event times are 24-hour time-of-day in both dial modes; the twelve
    /// hour dial folds them via `|hour - 12|` during slot placement.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_hour > 23 {
            return Err(ValidationError::HourOutOfRange {
                event_id: self.id.clone(),
                hour: self.start_hour,
            });
        }
        if self.start_minute > 59 {
            return Err(ValidationError::MinuteOutOfRange {
                event_id: self.id.clone(),
                minute: self.start_minute,
            });
        }
        if self.duration_minutes < 0 {
            return Err(ValidationError::NegativeDuration {
                event_id: self.id.clone(),
                minutes: self.duration_minutes,
            });
        }
        Ok(())
    }
}

/// Load an event set from a JSON file (an array of events).
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<Event>, CoreError> {
    let content = std::fs::read_to_string(path)?;
    let events: Vec<Event> = serde_json::from_str(&content)?;
    Ok(events)
}

/// The built-in demo event set.
///
/// Used by the CLI when no events file is given, and as a realistic
/// fixture in tests: three of the "Nightly" pairs start at identical
/// times and two wrap past midnight.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new("0", "Meeting", 18, 0, 30, "#aa00ff"),
        Event::new("1", "Late thing", 22, 30, 45, "#0033aa"),
        Event::new("2", "Lunch", 12, 0, 60, "#77ff77"),
        Event::new("3", "Early thing", 7, 30, 30, "#ffff00"),
        Event::new("4", "Meeting 2", 13, 20, 20, "#ffffff"),
        Event::new("5", "Nightly", 23, 20, 95, "#000000"),
        Event::new("6", "Nightly2", 17, 20, 95, "#000000"),
        Event::new("7", "Nightly3", 23, 20, 95, "#0033aa"),
        Event::new("8", "Nightly4", 17, 20, 95, "#0033aa"),
        Event::new("9", "Nightly5", 23, 20, 95, "#ffff00"),
        Event::new("10", "Nightly6", 17, 20, 95, "#ffff00"),
    ]
}
