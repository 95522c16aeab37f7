//! Top-level step gate between the invitation card and the journey view.

/// Which of the two views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    Invitation,
    Journey,
}

impl FlowStep {
    pub fn label(self) -> &'static str {
        match self {
            FlowStep::Invitation => "invitation",
            FlowStep::Journey => "journey",
        }
    }
}

/// One-way page flow: starts at the invitation and can only move forward.
///
/// There is no path back to `Invitation`; once the invitation is accepted
/// the journey view owns the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFlow {
    step: FlowStep,
}

impl PageFlow {
    pub fn new() -> Self {
        Self {
            step: FlowStep::Invitation,
        }
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    /// Accept the invitation.
    ///
    /// Returns `true` when this call performed the transition, so the
    /// caller can run view-entry effects (scroll reset, entrance
    /// animations) exactly once. Calling again after the transition is a
    /// no-op and returns `false`.
    pub fn advance(&mut self) -> bool {
        match self.step {
            FlowStep::Invitation => {
                self.step = FlowStep::Journey;
                tracing::debug!(step = self.step.label(), "page flow advanced");
                true
            }
            FlowStep::Journey => false,
        }
    }
}

impl Default for PageFlow {
    fn default() -> Self {
        Self::new()
    }
}
