//! Progressive reveal of session content.
//!
//! Provides:
//! - `build_sequence` (session → ordered `RevealItem`s)
//! - `RevealState` (saturating step counter with visibility tiers)

mod sequence;
mod state;

pub use sequence::{
    build_sequence, group_points, is_numbered, PointGroup, RevealItem, VIDEO_BREAK_PREFIX,
};
pub use state::{RevealCommand, RevealState, Visibility};
