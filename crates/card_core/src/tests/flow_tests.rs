use crate::flow::{FlowStep, PageFlow};

#[test]
fn starts_at_invitation() {
    let flow = PageFlow::new();
    assert_eq!(flow.step(), FlowStep::Invitation);
}

#[test]
fn advance_reaches_journey_and_stays_there() {
    let mut flow = PageFlow::new();

    assert!(flow.advance());
    assert_eq!(flow.step(), FlowStep::Journey);

    // Second call is a silent no-op with no second transition.
    assert!(!flow.advance());
    assert_eq!(flow.step(), FlowStep::Journey);
}

#[test]
fn default_is_the_initial_flow() {
    assert_eq!(PageFlow::default(), PageFlow::new());
}
