//! Session state and the reducer that applies interaction events to it.

use card_core::{
    ActivateOutcome, CardContent, EvasiveControl, FlowStep, PageFlow, ProximityOutcome,
};
use rand::Rng;

use crate::controller::events::{EvasiveTarget, InteractionEvent};

/// All mutable state a card session owns.
///
/// Updates happen synchronously inside the frame loop, one event at a
/// time; nothing here is shared across threads or sessions.
pub struct CardSession {
    flow: PageFlow,
    decline: EvasiveControl,
    surprise: Option<EvasiveControl>,
    revealed: bool,
    scroll_reset_pending: bool,
}

impl CardSession {
    pub fn new(content: &CardContent) -> Self {
        let bound = content.evasion_bound;
        let surprise = content
            .surprise
            .as_ref()
            .map(|gate| EvasiveControl::bounded(bound, gate.max_evasions));
        Self {
            flow: PageFlow::new(),
            decline: EvasiveControl::unbounded(bound),
            // Without a surprise gate the closing note is visible from the start.
            revealed: surprise.is_none(),
            surprise,
            scroll_reset_pending: false,
        }
    }

    pub fn step(&self) -> FlowStep {
        self.flow.step()
    }

    pub fn decline(&self) -> &EvasiveControl {
        &self.decline
    }

    pub fn surprise(&self) -> Option<&EvasiveControl> {
        self.surprise.as_ref()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// One-shot: true exactly once after the invitation is accepted, so
    /// the journey view starts scrolled to the top.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset_pending)
    }

    pub fn apply<R: Rng>(&mut self, event: InteractionEvent, rng: &mut R) {
        match event {
            InteractionEvent::Accepted => {
                if self.flow.advance() {
                    self.scroll_reset_pending = true;
                    tracing::debug!("invitation accepted");
                }
            }
            InteractionEvent::Proximity(target) => {
                if let Some(control) = self.control_mut(target) {
                    match control.on_proximity(rng) {
                        ProximityOutcome::Dodged(offset) => {
                            tracing::debug!(?target, x = offset.x, y = offset.y, "control dodged");
                        }
                        ProximityOutcome::FinalDodge(offset) => {
                            tracing::debug!(
                                ?target,
                                x = offset.x,
                                y = offset.y,
                                "control dodged for the last time"
                            );
                        }
                        ProximityOutcome::Ignored => {}
                    }
                }
            }
            InteractionEvent::Activated(target) => {
                if let Some(control) = self.control_mut(target) {
                    if control.on_activate() == ActivateOutcome::Confirmed {
                        self.revealed = true;
                        tracing::debug!(?target, "closing note revealed");
                    }
                }
            }
        }
    }

    fn control_mut(&mut self, target: EvasiveTarget) -> Option<&mut EvasiveControl> {
        match target {
            EvasiveTarget::Decline => Some(&mut self.decline),
            EvasiveTarget::Surprise => self.surprise.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_core::{CardContent, EvasionOffset, FlowStep};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn accept_advances_once_and_requests_one_scroll_reset() {
        let mut session = CardSession::new(&CardContent::default());
        let mut rng = rng();

        session.apply(InteractionEvent::Accepted, &mut rng);
        assert_eq!(session.step(), FlowStep::Journey);
        assert!(session.take_scroll_reset());
        assert!(!session.take_scroll_reset());

        session.apply(InteractionEvent::Accepted, &mut rng);
        assert_eq!(session.step(), FlowStep::Journey);
        assert!(!session.take_scroll_reset());
    }

    #[test]
    fn decline_proximity_moves_the_decoy_but_never_reveals() {
        let mut session = CardSession::new(&CardContent::default());
        let mut rng = rng();

        session.apply(InteractionEvent::Proximity(EvasiveTarget::Decline), &mut rng);
        assert_ne!(session.decline().offset(), EvasionOffset::ZERO);

        session.apply(InteractionEvent::Activated(EvasiveTarget::Decline), &mut rng);
        assert!(!session.revealed());
    }

    #[test]
    fn surprise_reveals_only_after_exhaustion() {
        let content = CardContent::default();
        let max = content.surprise.as_ref().expect("sample gate").max_evasions;
        let mut session = CardSession::new(&content);
        let mut rng = rng();

        session.apply(InteractionEvent::Activated(EvasiveTarget::Surprise), &mut rng);
        assert!(!session.revealed());

        for _ in 0..max {
            session.apply(InteractionEvent::Proximity(EvasiveTarget::Surprise), &mut rng);
        }
        assert!(session.surprise().expect("gate").is_exhausted());
        assert!(!session.revealed());

        session.apply(InteractionEvent::Activated(EvasiveTarget::Surprise), &mut rng);
        assert!(session.revealed());
    }

    #[test]
    fn ungated_content_starts_revealed() {
        let mut content = CardContent::default();
        content.surprise = None;
        let session = CardSession::new(&content);
        assert!(session.surprise().is_none());
        assert!(session.revealed());
    }
}
