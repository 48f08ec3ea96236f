//! Overlap layout engine.
//!
//! Turns an event set into conflict-free concentric track assignments plus
//! the two orderings the renderer needs (by track for the dial, by start
//! time for the stack panel).
//!
//! The engine partitions the dial into 5-minute slots and greedily colors
//! events in insertion order: each event lands one track above the highest
//! track already reserved on any slot it occupies, then raises those slots
//! to its own track plus one. This is a first-fit high-watermark heuristic,
//! not a minimum interval coloring -- the track count is bounded by the true
//! maximum simultaneous-event count but is not guaranteed minimal when
//! conflicts chain without being fully transitive.

mod plan;

pub use plan::{PlanItem, RenderPlan};

use crate::error::ValidationError;
use crate::projector;
use crate::schedule::{Event, Mode};

/// Ephemeral occupancy grid for one layout pass.
///
/// One counter per 5-minute slot, holding one more than the highest track
/// reserved on that slot so far.
struct SlotGrid {
    slots: Vec<u32>,
}

impl SlotGrid {
    fn new(mode: Mode) -> Self {
        Self {
            slots: vec![0; mode.slot_count()],
        }
    }

    /// Reserve a run of slots and return the track it lands on.
    ///
    /// A run extending past the end of the grid wraps to the front
    /// (midnight crossing). Slot indices are measured from the period end,
    /// so `slot_start` may legitimately sit at or past the grid length;
    /// the out-of-range head is clamped to an empty range.
    fn reserve(&mut self, slot_start: usize, slot_duration: usize) -> u32 {
        if slot_duration == 0 {
            // Zero-length occupancy: reads nothing, raises nothing.
            return 0;
        }

        let len = self.slots.len();
        let (head, tail) = if slot_start + slot_duration > len {
            (
                slot_start.min(len)..len,
                Some(0..(slot_start + slot_duration - len).min(len)),
            )
        } else {
            (slot_start..slot_start + slot_duration, None)
        };

        let mut track = 0;
        for range in std::iter::once(head.clone()).chain(tail.clone()) {
            for &counter in &self.slots[range] {
                track = track.max(counter);
            }
        }

        for range in std::iter::once(head).chain(tail) {
            for counter in &mut self.slots[range] {
                *counter = track + 1;
            }
        }

        track
    }
}

/// Layout engine for one dial mode.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    mode: Mode,
}

impl LayoutEngine {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// First occupied slot, measured from the *end* of the period.
    ///
    /// Slots anchor at `|hour - period_hours| * 12` rather than at
    /// midnight. This reverses the spatial ordering relative to naive
    /// expectation but is internally self-consistent: the same events
    /// always collide the same way. Do not change the anchor without
    /// re-deriving every track expectation in the tests.
    fn slot_start(&self, event: &Event) -> usize {
        let folded = (event.start_hour as i64 - self.mode.period_hours() as i64).unsigned_abs();
        folded as usize * 12 + (event.start_minute / 5) as usize
    }

    /// Run one full layout pass over the event set, in insertion order.
    ///
    /// Pure with respect to the caller's events: all derived state lands on
    /// the returned plan. `O(events x slots-per-event)`.
    ///
    /// # Errors
    /// Returns a `ValidationError` if any event violates the field
    /// contracts; nothing is partially computed in that case.
    pub fn compute(&self, events: &[Event]) -> Result<RenderPlan, ValidationError> {
        for event in events {
            event.validate()?;
        }

        let mut grid = SlotGrid::new(self.mode);
        let mut items = Vec::with_capacity(events.len());
        let mut max_track = 0;

        for event in events {
            let slot_duration = (event.duration_minutes as u64).div_ceil(5) as usize;
            let track = grid.reserve(self.slot_start(event), slot_duration);
            max_track = max_track.max(track);

            let (hh, mm, _) = projector::format_clock(event.start_hour, event.start_minute, 0);
            items.push(PlanItem {
                event_id: event.id.clone(),
                name: event.name.clone(),
                color: event.color.clone(),
                timecode: format!("{hh}{mm}"),
                track,
                angle: projector::to_angle(
                    event.start_hour,
                    event.start_minute,
                    0,
                    event.duration_minutes,
                    self.mode,
                ),
                active: false,
            });
        }

        // Both sorts are stable, preserving insertion order on ties.
        let mut by_track = items.clone();
        by_track.sort_by_key(|item| item.track);

        let mut by_start_time = items;
        by_start_time.sort_by(|a, b| a.timecode.cmp(&b.timecode));

        Ok(RenderPlan {
            by_track,
            by_start_time,
            max_track,
            mode: self.mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_assigns_track_zero() {
        let mut grid = SlotGrid::new(Mode::TwentyFourHour);
        assert_eq!(grid.reserve(100, 6), 0);
    }

    #[test]
    fn occupied_slots_push_later_events_up() {
        let mut grid = SlotGrid::new(Mode::TwentyFourHour);
        assert_eq!(grid.reserve(100, 6), 0);
        assert_eq!(grid.reserve(103, 6), 1);
        assert_eq!(grid.reserve(105, 2), 2);
        // Disjoint from all of the above.
        assert_eq!(grid.reserve(120, 4), 0);
    }

    #[test]
    fn wrapping_run_reserves_both_chunks() {
        let mut grid = SlotGrid::new(Mode::TwentyFourHour);
        // 4 slots at the end, 4 past the wrap.
        assert_eq!(grid.reserve(284, 8), 0);
        assert_eq!(grid.reserve(2, 2), 1);
        assert_eq!(grid.reserve(285, 1), 1);
    }

    #[test]
    fn wrap_track_covers_maximum_of_both_chunks() {
        let mut grid = SlotGrid::new(Mode::TwentyFourHour);
        assert_eq!(grid.reserve(0, 4), 0);
        assert_eq!(grid.reserve(0, 4), 1);
        // Head chunk is free, tail chunk collides at track 1: the whole
        // event takes track 2 and raises the head slots to 3 as well.
        assert_eq!(grid.reserve(286, 4), 2);
        assert_eq!(grid.reserve(287, 1), 3);
    }

    #[test]
    fn slot_start_past_grid_end_is_tolerated() {
        let mut grid = SlotGrid::new(Mode::TwentyFourHour);
        // start_hour 0, start_minute 55 measures to slot 299 on a 288-slot
        // grid; the head chunk is empty and only the tail is occupied.
        assert_eq!(grid.reserve(299, 2), 0);
        assert_eq!(grid.reserve(0, 13), 1);
    }

    #[test]
    fn zero_duration_reserves_nothing() {
        let mut grid = SlotGrid::new(Mode::TwelveHour);
        assert_eq!(grid.reserve(50, 0), 0);
        assert_eq!(grid.reserve(50, 1), 0);
    }

    #[test]
    fn slot_start_measures_from_period_end() {
        let engine = LayoutEngine::new(Mode::TwentyFourHour);
        let event = Event::new("e", "E", 23, 20, 95, "#ffffff");
        // |23 - 24| * 12 + 20/5 = 16
        assert_eq!(engine.slot_start(&event), 16);

        let engine = LayoutEngine::new(Mode::TwelveHour);
        let event = Event::new("e", "E", 18, 0, 30, "#ffffff");
        // |18 - 12| * 12 = 72
        assert_eq!(engine.slot_start(&event), 72);
    }

    #[test]
    fn compute_rejects_invalid_events() {
        let engine = LayoutEngine::new(Mode::TwentyFourHour);
        let events = vec![
            Event::new("ok", "Fine", 9, 0, 30, "#ffffff"),
            Event::new("bad", "Broken", 9, 0, -1, "#ffffff"),
        ];
        assert!(engine.compute(&events).is_err());
    }
}
