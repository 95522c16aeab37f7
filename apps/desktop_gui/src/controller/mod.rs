//! Controller layer: discrete interaction events and the session reducer.

pub mod events;
pub mod reducer;
