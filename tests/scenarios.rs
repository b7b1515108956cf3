//! End-to-end scenarios over the public API.

use railyard::audit::{audit_pipeline, findings};
use railyard::{
    fail, BuildError, Fsm, FsmError, Movement, Pipeline, PipelineFsm, PipelineRegistry, Stateful,
    TableBuilder,
};
use thiserror::Error;

type Entity = Stateful<String, Vec<String>>;

#[derive(Debug, Error)]
#[error("action failed")]
struct ActionFailed;

#[derive(Debug, Error)]
#[error("step rejected")]
struct StepRejected;

fn s(name: &str) -> String {
    name.to_string()
}

fn entity(state: &str) -> Entity {
    Stateful::new(s(state), Vec::new())
}

fn note(label: &'static str) -> impl Fn(Entity) -> railyard::ActionResult<Entity> {
    move |mut e: Entity| {
        e.data.push(label.to_string());
        Ok(e)
    }
}

#[test]
fn failing_action_reroutes_to_error_state() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .add_movement(
            s("NEW"),
            "E1",
            Movement::to(s("S1"))
                .with_action(|e: Entity| fail(e, ActionFailed))
                .recover_on::<ActionFailed>("E_ERR"),
        )
        .and_then(|b| b.route(s("NEW"), "E_ERR", s("S_ERR")))
        .and_then(|b| b.build_fsm())
        .unwrap();

    let result = fsm.fire("E1", entity("NEW")).unwrap();

    assert_eq!(result.state, "S_ERR");
}

#[test]
fn pipeline_walks_to_first_unplanned_state() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .add_movement(s("S1"), "T12", Movement::to(s("S2")).with_action(note("T12")))
        .and_then(|b| b.add_movement(s("S2"), "T23", Movement::to(s("S3")).with_action(note("T23"))))
        .and_then(|b| b.add_movement(s("S3"), "T34", Movement::to(s("S4")).with_action(note("T34"))))
        .and_then(|b| b.build_fsm())
        .unwrap();
    let pipeline = Pipeline::new()
        .add_pipe(s("S1"), "T12")
        .and_then(|p| p.add_pipe(s("S2"), "T23"))
        .and_then(|p| p.add_pipe(s("S3"), "T34"))
        .unwrap();

    let result = fsm.walk(entity("S1"), &pipeline).unwrap();

    assert_eq!(result.state, "S4");
    assert_eq!(result.data, vec!["T12", "T23", "T34"]);
}

#[test]
fn pipeline_stops_at_recovery_state() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .route(s("S1"), "T12", s("S2"))
        .and_then(|b| {
            b.add_movement(
                s("S2"),
                "T23",
                Movement::to(s("S3"))
                    .with_action(|e: Entity| fail(e, StepRejected))
                    .recover_with("T2_ERR"),
            )
        })
        .and_then(|b| b.route(s("S2"), "T2_ERR", s("S_ERROR")))
        .and_then(|b| b.route(s("S3"), "T34", s("S4")))
        .and_then(|b| b.build_fsm())
        .unwrap();
    let pipeline = Pipeline::try_from(vec![
        (s("S1"), "T12"),
        (s("S2"), "T23"),
        (s("S3"), "T34"),
    ])
    .unwrap();

    let (result, history) = fsm.walk_recorded(entity("S1"), &pipeline).unwrap();

    assert_eq!(result.state, "S_ERROR");
    assert_eq!(history.triggers(), vec!["T12", "T2_ERR"]);
    assert_eq!(history.transitions()[1].attempt, 1);
}

#[test]
fn missing_trigger_fails_without_moving_holder() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .route(s("NEW"), "GO", s("DONE"))
        .and_then(|b| b.build_fsm())
        .unwrap();

    let err = fsm.fire("STOP", entity("NEW")).unwrap_err();

    assert!(matches!(
        err.error(),
        FsmError::NoMovementForTrigger { state, trigger: Some(t) } if state == "NEW" && t == "STOP"
    ));
    assert_eq!(
        err.to_string(),
        "No movement from state 'NEW' by trigger 'STOP'"
    );
    assert_eq!(err.into_holder(), entity("NEW"));
}

#[test]
fn exhausted_recovery_returns_holder_with_payload() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .add_movement(
            s("NEW"),
            "CHARGE",
            Movement::to(s("PAID")).with_action(|mut e: Entity| {
                e.data.push("charged".to_string());
                fail(e, ActionFailed)
            }),
        )
        .and_then(|b| b.build_fsm())
        .unwrap();

    let err = fsm.fire("CHARGE", entity("NEW")).unwrap_err();

    assert!(matches!(
        err.error(),
        FsmError::NoMovementForTrigger { state, trigger: None } if state == "NEW"
    ));
    let (holder, error) = err.into_parts();
    assert_eq!(holder.state, "NEW");
    assert_eq!(holder.data, vec!["charged"]);
    assert_eq!(
        error.to_string(),
        "No movement from state 'NEW' by trigger '<none>'"
    );
}

#[test]
fn post_action_failure_returns_holder_at_entry_state() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .add_movement(
            s("NEW"),
            "SHIP",
            Movement::to(s("SHIPPED"))
                .with_action(note("packed"))
                .with_post_action(|mut e: Entity| {
                    e.data.push("label printed".to_string());
                    fail(e, StepRejected)
                }),
        )
        .and_then(|b| b.build_fsm())
        .unwrap();

    let holder = fsm.fire("SHIP", entity("NEW")).unwrap_err().into_holder();

    assert_eq!(holder.state, "NEW");
    assert_eq!(holder.data, vec!["packed", "label printed"]);
}

#[test]
fn failed_walk_keeps_progress_of_earlier_steps() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .add_movement(s("S1"), "T12", Movement::to(s("S2")).with_action(note("T12")))
        .and_then(|b| b.build_fsm())
        .unwrap();
    let pipeline = Pipeline::try_from(vec![(s("S1"), "T12"), (s("S2"), "T23")]).unwrap();

    let err = fsm.walk(entity("S1"), &pipeline).unwrap_err();

    assert!(matches!(err.error(), FsmError::UnknownState { state } if state == "S2"));
    let holder = err.into_holder();
    assert_eq!(holder.state, "S2");
    assert_eq!(holder.data, vec!["T12"]);
}

#[test]
fn registry_walk_fires_first_then_follows_plan() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .add_movement(s("NEW"), "START", Movement::to(s("S1")).with_action(note("START")))
        .and_then(|b| b.add_movement(s("S1"), "T12", Movement::to(s("S2")).with_action(note("T12"))))
        .and_then(|b| b.route(s("S2"), "T23", s("S3")))
        .and_then(|b| b.build_fsm())
        .unwrap();
    let registry = PipelineRegistry::new()
        .register(
            "standard",
            Pipeline::try_from(vec![(s("S1"), "T12"), (s("S2"), "T23")]).unwrap(),
        )
        .unwrap();
    let machine = PipelineFsm::new(fsm, registry);

    let result = machine.walk_on("START", entity("NEW"), &"standard").unwrap();
    assert_eq!(result.state, "S3");
    assert_eq!(result.data, vec!["START", "T12"]);

    let err = machine
        .walk_on("START", entity("NEW"), &"express")
        .unwrap_err();
    assert!(matches!(err.error(), FsmError::PipelineNotFound { pipeline } if pipeline == "express"));
    assert_eq!(err.into_holder(), entity("NEW"));
}

#[test]
fn query_first_and_fire_first_walks_differ() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .route(s("NEW"), "START", s("S1"))
        .and_then(|b| b.route(s("S1"), "T12", s("S2")))
        .and_then(|b| b.build_fsm())
        .unwrap();
    let pipeline = Pipeline::try_from(vec![(s("S1"), "T12")]).unwrap();

    // NEW is not planned, so a query-first walk does nothing.
    let untouched = fsm.walk(entity("NEW"), &pipeline).unwrap();
    assert_eq!(untouched.state, "NEW");

    let walked = fsm.walk_from("START", entity("NEW"), &pipeline).unwrap();
    assert_eq!(walked.state, "S2");
}

#[test]
fn construction_rejects_duplicates() {
    let duplicate_movement = TableBuilder::<String, &str, Entity>::new()
        .route(s("A"), "GO", s("B"))
        .and_then(|b| b.route(s("A"), "GO", s("C")));
    assert!(matches!(
        duplicate_movement,
        Err(BuildError::DuplicateMovement { .. })
    ));

    let duplicate_pipe = Pipeline::new()
        .add_pipe(s("A"), "GO")
        .and_then(|p| p.add_pipe(s("A"), "STOP"));
    assert!(matches!(duplicate_pipe, Err(BuildError::DuplicatePipe { .. })));

    let err: FsmError = TableBuilder::<String, &str, Entity>::new()
        .build()
        .unwrap_err()
        .into();
    assert!(matches!(err, FsmError::InvalidConfiguration(BuildError::NoStates)));
}

#[test]
fn audit_flags_pipeline_that_would_stall() {
    let fsm: Fsm<String, &str, Entity> = TableBuilder::new()
        .route(s("S1"), "T12", s("S2"))
        .and_then(|b| b.build_fsm())
        .unwrap();
    let pipeline = Pipeline::try_from(vec![(s("S1"), "T12"), (s("S2"), "T23")]).unwrap();

    let found = findings(&audit_pipeline(&pipeline, fsm.table()));

    assert_eq!(found.len(), 1);
    let err = fsm.walk(entity("S1"), &pipeline).unwrap_err();
    assert!(matches!(err.error(), FsmError::UnknownState { .. }));
}
