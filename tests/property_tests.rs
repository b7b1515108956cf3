//! Property-based tests for dispatch and pipeline walks.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use railyard::{
    fail, Fsm, FsmError, Movement, Pipeline, State, StateHistory, StateTransition, Stateful,
    TableBuilder,
};
use thiserror::Error;

type Holder = Stateful<String, u32>;

#[derive(Debug, Error)]
#[error("kind a")]
struct KindA;

#[derive(Debug, Error)]
#[error("kind b")]
struct KindB;

fn state(i: usize) -> String {
    format!("S{i}")
}

fn trigger(i: usize) -> String {
    format!("T{i}")
}

/// Linear chain S0 -T0-> S1 -T1-> ... -> S{len}, with a matching plan.
fn chain(len: usize) -> (Fsm<String, String, Holder>, Pipeline<String, String>) {
    let mut builder = TableBuilder::new();
    let mut pipeline = Pipeline::new();
    for i in 0..len {
        builder = builder.route(state(i), trigger(i), state(i + 1)).unwrap();
        pipeline = pipeline.add_pipe(state(i), trigger(i)).unwrap();
    }
    (builder.build_fsm().unwrap(), pipeline)
}

prop_compose! {
    fn arbitrary_holder()(idx in 0..8usize, data in any::<u32>()) -> Holder {
        Stateful::new(state(idx), data)
    }
}

proptest! {
    #[test]
    fn move_without_action_lands_on_target(
        from in 0..8usize,
        to in 0..8usize,
        data in any::<u32>(),
    ) {
        let fsm: Fsm<String, String, Holder> = TableBuilder::new()
            .route(state(from), trigger(0), state(to))
            .and_then(|b| b.build_fsm())
            .unwrap();

        let result = fsm.fire(trigger(0), Stateful::new(state(from), data)).unwrap();

        prop_assert_eq!(result.state, state(to));
        prop_assert_eq!(result.data, data);
    }

    #[test]
    fn recovery_matches_failure_kind_exactly(raise_a in any::<bool>(), data in any::<u32>()) {
        let fsm: Fsm<String, &str, Holder> = TableBuilder::new()
            .add_movement(
                state(0),
                "GO",
                Movement::to(state(1))
                    .with_action(move |h: Holder| {
                        if raise_a { fail(h, KindA) } else { fail(h, KindB) }
                    })
                    .recover_on::<KindA>("ON_A")
                    .recover_with("ON_OTHER"),
            )
            .and_then(|b| b.route(state(0), "ON_A", "A_HANDLED".to_string()))
            .and_then(|b| b.route(state(0), "ON_OTHER", "OTHER_HANDLED".to_string()))
            .and_then(|b| b.build_fsm())
            .unwrap();

        let (result, history) = fsm.fire_recorded("GO", Stateful::new(state(0), data)).unwrap();

        let expected = if raise_a { "A_HANDLED" } else { "OTHER_HANDLED" };
        prop_assert_eq!(result.state.as_str(), expected);
        prop_assert_eq!(result.data, data);
        prop_assert_eq!(&history.transitions()[0].from, &state(0));
    }

    #[test]
    fn walk_ends_at_unplanned_state(len in 1..24usize, start_offset in 0..24usize) {
        let (fsm, pipeline) = chain(len);
        let start = start_offset % (len + 1);

        let (result, history) = fsm
            .walk_recorded(Stateful::new(state(start), 7), &pipeline)
            .unwrap();

        prop_assert_eq!(&result.state, &state(len));
        prop_assert!(!pipeline.contains_state(&result.state));
        prop_assert_eq!(history.len(), len - start);
    }

    #[test]
    fn self_loop_is_idempotent(holder in arbitrary_holder()) {
        let fsm: Fsm<String, &str, Holder> = TableBuilder::new()
            .route(holder.state.clone(), "STAY", holder.state.clone())
            .and_then(|b| b.build_fsm())
            .unwrap();

        let once = fsm.fire("STAY", holder.clone()).unwrap();
        let twice = fsm.fire("STAY", once.clone()).unwrap();

        prop_assert_eq!(&once, &holder);
        prop_assert_eq!(&twice, &holder);
    }

    #[test]
    fn unknown_trigger_reports_entry_state(holder in arbitrary_holder()) {
        let fsm: Fsm<String, &str, Holder> = TableBuilder::new()
            .route(holder.state.clone(), "KNOWN", "ELSEWHERE".to_string())
            .and_then(|b| b.build_fsm())
            .unwrap();
        let before = holder.clone();

        let err = fsm.fire("UNKNOWN", holder).unwrap_err();

        let matched = matches!(
            err.error(),
            FsmError::NoMovementForTrigger { state, trigger: Some(t) }
                if *state == before.state && t == "UNKNOWN"
        );
        prop_assert!(matched);
        prop_assert_eq!(err.into_holder(), before);
    }

    #[test]
    fn history_path_follows_recorded_transitions(len in 1..16usize) {
        let mut history = StateHistory::new();
        for i in 0..len {
            history = history.record(StateTransition {
                from: state(i),
                to: state(i + 1),
                trigger: trigger(i),
                timestamp: chrono::Utc::now(),
                attempt: 0,
            });
        }

        let path = history.get_path();
        prop_assert_eq!(path.len(), len + 1);
        prop_assert_eq!(path[0].name(), "S0");
        prop_assert_eq!(path[len], &state(len));
    }
}
