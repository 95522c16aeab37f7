//! Timeline entries and their alternating placement.

use serde::{Deserialize, Serialize};

/// One memory on the journey timeline.
///
/// All fields are required; [`crate::CardContent::validate`] rejects
/// entries with empty strings. `photo` is an image reference resolved by
/// the GUI layer relative to the content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub photo: String,
    pub date: String,
    pub caption: String,
}

/// Which side of the timeline spine an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    /// Entries alternate: even ordinals left, odd ordinals right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            TimelineSide::Left => TimelineSide::Right,
            TimelineSide::Right => TimelineSide::Left,
        }
    }
}
