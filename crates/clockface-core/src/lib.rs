//! # Clockface Core Library
//!
//! Core layout engine for Clockface, a radial schedule viewer: events with
//! a start time and duration are placed on a 24-hour or 12-hour analog
//! dial, with simultaneous events resolved onto concentric tracks, plus a
//! parallel linear stack view ordered by start time.
//!
//! ## Architecture
//!
//! - **Projector**: pure time-of-day to angle conversion; leaf module
//! - **Layout**: 5-minute-slot occupancy model and greedy track assignment,
//!   producing a [`RenderPlan`] the renderer draws from
//! - **Schedule**: the immutable event model and dial [`Mode`]
//! - **Storage**: TOML configuration (dial mode, refresh cadence)
//!
//! The whole core is single-threaded and synchronous: the caller runs one
//! full layout per event-set or mode change, then refreshes only the
//! needle angle and active flags per tick via
//! [`RenderPlan::refresh_active`].

pub mod color;
pub mod error;
pub mod layout;
pub mod projector;
pub mod schedule;
pub mod storage;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use layout::{LayoutEngine, PlanItem, RenderPlan};
pub use projector::{format_clock, now_angle, to_angle, ArcSpan};
pub use schedule::{load_events, sample_events, Event, Mode};
pub use storage::Config;
