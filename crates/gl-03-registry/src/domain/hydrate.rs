//! Restoring persisted state

use super::state::{
    initial_state, sample_audit_event, sample_project, AppState, SAMPLE_CLAIMED_REDUCTION,
    SAMPLE_PROJECT_ID,
};
use shared_types::AuditAction;
use tracing::{info, warn};

/// Rebuild the state from a persisted JSON document.
///
/// A missing or unparsable document yields the initial state. A parsed
/// document always ends up with a correct sample project:
///
/// - sample missing: it is prepended, along with its audit event when the
///   log has no entry for it;
/// - sample present with the wrong claimed reduction: it is replaced, and so
///   is its verification audit event.
pub fn hydrate(saved: Option<&str>) -> AppState {
    let Some(saved) = saved else {
        info!("No saved ledger state, starting from initial state");
        return initial_state();
    };

    let mut state: AppState = match serde_json::from_str(saved) {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, "Saved ledger state is unreadable, starting from initial state");
            return initial_state();
        }
    };

    repair_sample(&mut state);
    state
}

fn repair_sample(state: &mut AppState) {
    match state.projects.iter().position(|p| p.id == SAMPLE_PROJECT_ID) {
        None => {
            info!("Restoring missing sample project");
            state.projects.insert(0, sample_project());
            if !state.audit_log.iter().any(|e| e.project_id == SAMPLE_PROJECT_ID) {
                state.audit_log.insert(0, sample_audit_event());
            }
        }
        Some(idx) if state.projects[idx].claimed_reduction != SAMPLE_CLAIMED_REDUCTION => {
            info!(
                claimed = state.projects[idx].claimed_reduction,
                "Repairing sample project tonnage"
            );
            state.projects[idx] = sample_project();
            if let Some(event) = state.audit_log.iter_mut().find(|e| {
                e.project_id == SAMPLE_PROJECT_ID && e.action_type == AuditAction::Verification
            }) {
                *event = sample_audit_event();
            }
        }
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::{reduce, Action};
    use shared_types::{AuditEvent, Project, UserRole};

    fn other_project() -> Project {
        Project {
            id: "proj-2".to_string(),
            claimed_reduction: 300.0,
            ..sample_project()
        }
    }

    #[test]
    fn test_missing_or_garbage_yields_initial() {
        assert_eq!(hydrate(None), initial_state());
        assert_eq!(hydrate(Some("not json")), initial_state());
        assert_eq!(hydrate(Some(r#"{"projects": 3}"#)), initial_state());
    }

    #[test]
    fn test_saved_state_is_kept() {
        let state = reduce(initial_state(), Action::SetUserRole(UserRole::BuyerSeller));
        let state = reduce(state, Action::AddProject(other_project()));
        let json = serde_json::to_string(&state).unwrap();

        assert_eq!(hydrate(Some(&json)), state);
    }

    #[test]
    fn test_missing_sample_is_prepended_with_event() {
        let state = AppState {
            projects: vec![other_project()],
            ..AppState::default()
        };
        let json = serde_json::to_string(&state).unwrap();

        let restored = hydrate(Some(&json));
        assert_eq!(restored.projects[0].id, SAMPLE_PROJECT_ID);
        assert_eq!(restored.projects[1].id, "proj-2");
        assert_eq!(restored.audit_log, vec![sample_audit_event()]);
    }

    #[test]
    fn test_existing_sample_event_is_not_duplicated() {
        let event = AuditEvent {
            id: "evt-trade".to_string(),
            action_type: AuditAction::Trade,
            ..sample_audit_event()
        };
        let state = AppState {
            projects: vec![],
            audit_log: vec![event.clone()],
            ..AppState::default()
        };
        let restored = hydrate(Some(&serde_json::to_string(&state).unwrap()));
        assert_eq!(restored.projects.len(), 1);
        assert_eq!(restored.audit_log, vec![event]);
    }

    #[test]
    fn test_wrong_tonnage_is_repaired() {
        let mut state = initial_state();
        state.projects[0].claimed_reduction = 1000.0;
        state.projects[0].available_supply = 950.0;
        state.audit_log[0].details = "stale".to_string();
        state.audit_log.insert(
            0,
            AuditEvent {
                id: "evt-buy".to_string(),
                action_type: AuditAction::Trade,
                ..sample_audit_event()
            },
        );

        let restored = hydrate(Some(&serde_json::to_string(&state).unwrap()));
        assert_eq!(restored.projects[0], sample_project());
        assert_eq!(restored.audit_log[0].id, "evt-buy");
        assert_eq!(restored.audit_log[1], sample_audit_event());
    }

    #[test]
    fn test_correct_sample_is_left_alone() {
        let mut state = initial_state();
        state.projects[0].available_supply = 12.0;
        let restored = hydrate(Some(&serde_json::to_string(&state).unwrap()));
        assert_eq!(restored.projects[0].available_supply, 12.0);
    }
}
