//! Audit checks over tables and pipelines using Validation.

use crate::audit::findings::AuditFinding;
use crate::core::{State, Trigger};
use crate::engine::TransitionTable;
use crate::pipeline::Pipeline;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of an audit: success, or every finding at once.
pub type AuditResult = Validation<(), NonEmptyVec<AuditFinding>>;

/// Check that every recovery trigger has a movement from the same state,
/// and that no final state has outbound movements.
///
/// Recovery always fires from the state the holder entered with, so a
/// route to a trigger that state does not know ends in
/// `NoMovementForTrigger`.
///
/// Findings are ordered by state name, then trigger name.
pub fn audit_table<S: State, T: Trigger, H>(table: &TransitionTable<S, T, H>) -> AuditResult {
    let mut checks: Vec<AuditResult> = Vec::new();

    let mut states: Vec<_> = table.iter().collect();
    states.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()));

    for (state, config) in states {
        let mut movements: Vec<_> = config.iter().collect();
        movements.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()));

        for (trigger, movement) in movements {
            if state.is_final() {
                checks.push(Validation::fail(AuditFinding::MovementFromFinalState {
                    state: state.name().to_string(),
                    trigger: trigger.name().to_string(),
                }));
            }

            let mut recoveries: Vec<&T> = movement.recovery_triggers().collect();
            recoveries.sort_by(|a, b| a.name().cmp(b.name()));
            recoveries.dedup();

            for recovery in recoveries {
                let check = if config.contains_trigger(recovery) {
                    Validation::success(())
                } else {
                    Validation::fail(AuditFinding::DanglingRecovery {
                        state: state.name().to_string(),
                        trigger: trigger.name().to_string(),
                        recovery: recovery.name().to_string(),
                    })
                };
                checks.push(check);
            }
        }
    }

    accumulate(checks)
}

/// Check that every planned step of `pipeline` resolves in `table`.
///
/// Findings are ordered by state name.
pub fn audit_pipeline<S: State, T: Trigger, H>(
    pipeline: &Pipeline<S, T>,
    table: &TransitionTable<S, T, H>,
) -> AuditResult {
    let mut steps: Vec<_> = pipeline.iter().collect();
    steps.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()));

    let checks: Vec<AuditResult> = steps
        .into_iter()
        .map(|(state, trigger)| match table.state_config(state) {
            None => Validation::fail(AuditFinding::UnknownPipelineState {
                state: state.name().to_string(),
                trigger: trigger.name().to_string(),
            }),
            Some(config) if !config.contains_trigger(trigger) => {
                Validation::fail(AuditFinding::UnknownPipelineTrigger {
                    state: state.name().to_string(),
                    trigger: trigger.name().to_string(),
                })
            }
            Some(_) => Validation::success(()),
        })
        .collect();

    accumulate(checks)
}

/// Flatten an audit result into a list of findings (empty on success).
pub fn findings(result: &AuditResult) -> Vec<AuditFinding> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn accumulate(checks: Vec<AuditResult>) -> AuditResult {
    if checks.is_empty() {
        return Validation::success(());
    }
    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}
