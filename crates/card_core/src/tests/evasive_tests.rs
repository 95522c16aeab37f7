use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::evasive::{ActivateOutcome, EvasionOffset, EvasiveControl, ProximityOutcome};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[test]
fn offset_is_zero_before_the_first_dodge() {
    let control = EvasiveControl::unbounded(100.0);
    assert_eq!(control.offset(), EvasionOffset::ZERO);
}

#[test]
fn unbounded_control_dodges_forever_within_bound() {
    let mut rng = rng();
    let mut control = EvasiveControl::unbounded(100.0);

    for _ in 0..100 {
        match control.on_proximity(&mut rng) {
            ProximityOutcome::Dodged(offset) => {
                assert!(offset.x.abs() <= 100.0, "x out of bound: {}", offset.x);
                assert!(offset.y.abs() <= 100.0, "y out of bound: {}", offset.y);
            }
            other => panic!("unbounded control should always dodge, got {other:?}"),
        }
    }

    assert_eq!(control.dodges(), 0);
    assert!(!control.is_exhausted());
}

#[test]
fn unbounded_control_never_confirms() {
    let mut control = EvasiveControl::unbounded(50.0);
    assert_eq!(control.on_activate(), ActivateOutcome::Ignored);
    assert!(!control.is_confirmed());
}

#[test]
fn bounded_counter_is_min_of_events_and_budget() {
    let mut rng = rng();
    let max = 4;
    let mut control = EvasiveControl::bounded(80.0, max);

    for events in 1..=10u32 {
        control.on_proximity(&mut rng);
        assert_eq!(control.dodges(), events.min(max));
    }
}

#[test]
fn offsets_freeze_once_the_budget_is_spent() {
    let mut rng = rng();
    let mut control = EvasiveControl::bounded(80.0, 3);

    assert!(matches!(
        control.on_proximity(&mut rng),
        ProximityOutcome::Dodged(_)
    ));
    assert!(matches!(
        control.on_proximity(&mut rng),
        ProximityOutcome::Dodged(_)
    ));
    assert!(matches!(
        control.on_proximity(&mut rng),
        ProximityOutcome::FinalDodge(_)
    ));

    let frozen = control.offset();
    for _ in 0..5 {
        assert_eq!(control.on_proximity(&mut rng), ProximityOutcome::Ignored);
        assert_eq!(control.offset(), frozen);
    }
}

#[test]
fn activation_only_confirms_after_exhaustion_and_only_once() {
    let mut rng = rng();
    let mut control = EvasiveControl::bounded(100.0, 5);

    for _ in 0..3 {
        control.on_proximity(&mut rng);
    }
    assert_eq!(control.dodges(), 3);
    assert_eq!(control.on_activate(), ActivateOutcome::Ignored);
    assert!(!control.is_confirmed());

    for _ in 0..2 {
        control.on_proximity(&mut rng);
    }
    assert_eq!(control.dodges(), 5);
    assert!(control.is_exhausted());

    assert_eq!(control.on_activate(), ActivateOutcome::Confirmed);
    assert!(control.is_confirmed());

    // Confirm latch is one-shot; later clicks are no-ops.
    assert_eq!(control.on_activate(), ActivateOutcome::Ignored);
    assert!(control.is_confirmed());
}

#[test]
fn zero_budget_control_starts_caught() {
    let mut rng = rng();
    let mut control = EvasiveControl::bounded(100.0, 0);

    assert!(control.is_exhausted());
    assert_eq!(control.on_proximity(&mut rng), ProximityOutcome::Ignored);
    assert_eq!(control.offset(), EvasionOffset::ZERO);
    assert_eq!(control.on_activate(), ActivateOutcome::Confirmed);
}
