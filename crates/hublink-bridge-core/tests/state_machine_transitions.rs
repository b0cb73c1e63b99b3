use hublink_bridge_core::{BridgeLifecycle, HandoffState, LifecycleError};

#[test]
fn handoff_wires_exactly_once() {
    let state = HandoffState::NotWired;
    let (state, transition) = state.wire();
    assert_eq!(state, HandoffState::Wired);
    let transition = transition.expect("first wire produces a transition");
    assert_eq!(transition.from, "not_wired");
    assert_eq!(transition.to, "wired");

    let (state, transition) = state.wire();
    assert_eq!(state, HandoffState::Wired);
    assert!(transition.is_none(), "re-wiring is a no-op");
}

#[test]
fn handoff_initial_state_is_not_wired() {
    assert_eq!(HandoffState::default(), HandoffState::NotWired);
}

#[test]
fn lifecycle_attach_is_exclusive() {
    let lifecycle = BridgeLifecycle::Detached;
    let (lifecycle, _) = lifecycle.attach().expect("detached -> attached");
    assert_eq!(lifecycle, BridgeLifecycle::Attached);

    let err = lifecycle.attach().expect_err("double attach must fail");
    assert_eq!(err, LifecycleError::AlreadyAttached);
}

#[test]
fn lifecycle_detach_is_idempotent() {
    let lifecycle = BridgeLifecycle::Attached;
    let (lifecycle, transition) = lifecycle.detach();
    assert_eq!(lifecycle, BridgeLifecycle::Detached);
    assert!(transition.is_some());

    let (lifecycle, transition) = lifecycle.detach();
    assert_eq!(lifecycle, BridgeLifecycle::Detached);
    assert!(transition.is_none());
}
