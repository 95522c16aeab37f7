//! Interaction events the views hand to the reducer.
//!
//! Each value is one discrete user action. The views collect them while
//! rendering a frame and the app applies them in order afterwards, so
//! every handler observes the state left behind by the previous one.

/// Which evasive control an event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvasiveTarget {
    /// The "no" decoy on the invitation card.
    Decline,
    /// The bounded surprise button gating the closing note.
    Surprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// The accept button was clicked on the invitation view.
    Accepted,
    /// The pointer entered (or a touch landed on) an evasive control.
    Proximity(EvasiveTarget),
    /// An evasive control was clicked or tapped.
    Activated(EvasiveTarget),
}
