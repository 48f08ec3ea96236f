//! Render plan produced by the layout engine.

use serde::{Deserialize, Serialize};

use crate::projector::ArcSpan;
use crate::schedule::Mode;

/// One event's derived layout state.
///
/// Carries everything the renderer needs; the source `Event` stays
/// untouched and the two are tied together by `event_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    pub event_id: String,
    pub name: String,
    pub color: String,
    /// Zero-padded `HHMM` sort key for the stack ordering.
    pub timecode: String,
    /// Concentric ring index. Events sharing a track never overlap in time.
    pub track: u32,
    pub angle: ArcSpan,
    /// Whether the wall-clock needle currently sits inside this event.
    pub active: bool,
}

/// Full layout output for one event set.
///
/// `by_track` orders events for dial drawing (inner rings first, so outer
/// ones draw over them); `by_start_time` orders them for the stack panel.
/// Both contain the same items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub by_track: Vec<PlanItem>,
    pub by_start_time: Vec<PlanItem>,
    /// Highest track index in use; 0 for an empty or conflict-free set.
    pub max_track: u32,
    pub mode: Mode,
}

impl RenderPlan {
    /// Number of concentric rings the renderer should divide the radius by.
    pub fn ring_count(&self) -> u32 {
        self.max_track + 1
    }

    pub fn len(&self) -> usize {
        self.by_track.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_track.is_empty()
    }

    /// Look up an item by event id (stack ordering).
    pub fn item(&self, event_id: &str) -> Option<&PlanItem> {
        self.by_start_time
            .iter()
            .find(|item| item.event_id == event_id)
    }

    /// Cheap per-tick path: recompute only the active flags against the
    /// current needle angle, leaving tracks and orderings untouched.
    pub fn refresh_active(&mut self, now_deg: f64) {
        for item in self
            .by_track
            .iter_mut()
            .chain(self.by_start_time.iter_mut())
        {
            item.active = item.angle.contains(now_deg);
        }
    }

    /// Event ids currently active, in stack order.
    pub fn active_ids(&self) -> Vec<&str> {
        self.by_start_time
            .iter()
            .filter(|item| item.active)
            .map(|item| item.event_id.as_str())
            .collect()
    }
}
