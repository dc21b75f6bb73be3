//! Scenario tests for the public machine API.

use std::sync::Arc;
use waypoint::{fsm_config, ConfigBuilder, Configuration, FiniteStateMachine, FsmError};

fn traffic_light() -> Configuration {
    fsm_config! {
        initial: green,
        states: {
            green: { timer => yellow },
            yellow: { timer => red },
            red: { timer => green },
        }
    }
    .unwrap()
}

#[test]
fn traffic_light_undo_redo_walkthrough() {
    let mut fsm = FiniteStateMachine::new(traffic_light()).unwrap();
    assert_eq!(fsm.state(), "green");
    assert_eq!(fsm.history(), ["green"]);

    fsm.trigger("timer").unwrap();
    assert_eq!(fsm.state(), "yellow");
    assert_eq!(fsm.history(), ["green", "yellow"]);

    fsm.trigger("timer").unwrap();
    assert_eq!(fsm.state(), "red");

    assert!(fsm.undo());
    assert_eq!(fsm.state(), "yellow");
    assert!(fsm.undo());
    assert_eq!(fsm.state(), "green");
    assert!(!fsm.undo());
    assert_eq!(fsm.state(), "green");

    assert!(fsm.redo());
    assert_eq!(fsm.state(), "yellow");

    fsm.trigger("timer").unwrap();
    assert_eq!(fsm.state(), "red");
    assert!(fsm.redo_stack().is_empty());
    assert!(!fsm.redo());
}

#[test]
fn document_workflow_from_json() {
    let mut fsm = FiniteStateMachine::from_json(
        r#"{
            "initial": "draft",
            "states": {
                "draft": { "transitions": { "submit": "review" } },
                "review": { "transitions": { "approve": "published", "reject": "draft" } },
                "published": { "transitions": { "archive": "archived" } },
                "archived": {}
            }
        }"#,
    )
    .unwrap();

    assert_eq!(
        fsm.states(None),
        vec!["draft", "review", "published", "archived"]
    );
    assert_eq!(fsm.states(Some("reject")), vec!["review"]);

    fsm.trigger("submit").unwrap();
    fsm.trigger("reject").unwrap();
    fsm.trigger("submit").unwrap();
    fsm.trigger("approve").unwrap();
    assert_eq!(
        fsm.history(),
        ["draft", "review", "draft", "review", "published"]
    );

    let err = fsm.trigger("submit").unwrap_err();
    assert_eq!(
        err,
        FsmError::InvalidTransition {
            state: "published".to_string(),
            event: "submit".to_string(),
        }
    );

    fsm.change_state("archived").unwrap();
    assert!(matches!(
        fsm.trigger("archive"),
        Err(FsmError::InvalidTransition { .. })
    ));
}

#[test]
fn error_kinds_are_distinguishable() {
    let mut fsm = FiniteStateMachine::new(traffic_light()).unwrap();

    let config_err = FiniteStateMachine::from_json("null").unwrap_err();
    let state_err = fsm.change_state("purple").unwrap_err();
    let transition_err = fsm.trigger("honk").unwrap_err();

    assert!(matches!(config_err, FsmError::InvalidConfig(_)));
    assert!(matches!(state_err, FsmError::InvalidState { .. }));
    assert!(matches!(transition_err, FsmError::InvalidTransition { .. }));
}

#[test]
fn machines_sharing_configuration_are_independent() {
    let config = Arc::new(traffic_light());
    let mut machines: Vec<_> = (0..3)
        .map(|_| FiniteStateMachine::new(Arc::clone(&config)).unwrap())
        .collect();

    for (steps, fsm) in machines.iter_mut().enumerate() {
        for _ in 0..steps {
            fsm.trigger("timer").unwrap();
        }
    }

    let states: Vec<_> = machines.iter().map(FiniteStateMachine::state).collect();
    assert_eq!(states, vec!["green", "yellow", "red"]);
    assert_eq!(machines[2].config(), config.as_ref());
}

#[test]
fn direct_jump_and_redo_interleave() {
    // change_state keeps the redo stack, so redo replays onto the jumped path.
    let mut fsm = FiniteStateMachine::new(traffic_light()).unwrap();
    fsm.trigger("timer").unwrap();
    fsm.trigger("timer").unwrap();
    assert!(fsm.undo());
    assert!(fsm.undo());

    fsm.change_state("red").unwrap();
    assert!(fsm.can_redo());

    assert!(fsm.redo());
    assert_eq!(fsm.state(), "yellow");
    assert!(fsm.redo());
    assert_eq!(fsm.state(), "red");
    assert_eq!(fsm.history(), ["green", "red", "yellow", "red"]);
}

#[test]
fn reset_then_undo_returns_to_previous_state() {
    let mut fsm = FiniteStateMachine::new(traffic_light()).unwrap();
    fsm.trigger("timer").unwrap();
    fsm.reset();
    assert_eq!(fsm.state(), "green");

    assert!(fsm.undo());
    assert_eq!(fsm.state(), "yellow");
}

#[test]
fn freshly_reset_machine_cannot_undo_after_clear() {
    let mut fsm = FiniteStateMachine::new(traffic_light()).unwrap();
    fsm.trigger("timer").unwrap();
    fsm.clear_history();
    fsm.reset();

    assert_eq!(fsm.history(), ["green"]);
    assert!(!fsm.undo());
}

#[test]
fn clear_history_then_continue() {
    let mut fsm = FiniteStateMachine::new(traffic_light()).unwrap();
    fsm.trigger("timer").unwrap();
    fsm.clear_history();

    assert_eq!(fsm.state(), "yellow");
    assert!(fsm.history().is_empty());

    fsm.trigger("timer").unwrap();
    assert_eq!(fsm.history(), ["red"]);
    assert!(!fsm.undo());
}

#[test]
fn builder_configuration_drives_machine() {
    let config = ConfigBuilder::new()
        .initial("locked")
        .transition("locked", "coin", "unlocked")
        .transition("locked", "push", "locked")
        .transition("unlocked", "push", "locked")
        .transition("unlocked", "coin", "unlocked")
        .build()
        .unwrap();

    let mut fsm = FiniteStateMachine::new(config).unwrap();
    fsm.trigger("push").unwrap();
    assert_eq!(fsm.history(), ["locked"]);

    fsm.trigger("coin").unwrap();
    fsm.trigger("coin").unwrap();
    fsm.trigger("push").unwrap();
    assert_eq!(fsm.history(), ["locked", "unlocked", "locked"]);
}
