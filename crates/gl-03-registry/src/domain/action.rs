//! State transitions and the reducer that applies them

use super::state::{initial_state, AppState};
use serde::{Deserialize, Serialize};
use shared_types::{AuditEvent, Project, UserRole};

/// Every change to the ledger goes through one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Prepend a project.
    AddProject(Project),
    /// Replace the project with the same id.
    UpdateProject(Project),
    SetUserRole(UserRole),
    /// Prepend an audit event.
    AddAuditEvent(AuditEvent),
    #[serde(rename_all = "camelCase")]
    BuyCredits { project_id: String, amount: f64 },
    RetireCredits { amount: f64 },
    ResetState,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddProject(_) => "ADD_PROJECT",
            Action::UpdateProject(_) => "UPDATE_PROJECT",
            Action::SetUserRole(_) => "SET_USER_ROLE",
            Action::AddAuditEvent(_) => "ADD_AUDIT_EVENT",
            Action::BuyCredits { .. } => "BUY_CREDITS",
            Action::RetireCredits { .. } => "RETIRE_CREDITS",
            Action::ResetState => "RESET_STATE",
        }
    }
}

/// Apply an action to a state, producing the next state.
///
/// Total over all inputs: amounts are clamped rather than rejected, and a
/// purchase from an unknown project leaves the state unchanged. Callers that
/// need validation do it before dispatching.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::AddProject(project) => {
            state.projects.insert(0, project);
        }
        Action::UpdateProject(project) => {
            for existing in state.projects.iter_mut().filter(|p| p.id == project.id) {
                *existing = project.clone();
            }
        }
        Action::SetUserRole(role) => {
            state.user_role = role;
        }
        Action::AddAuditEvent(event) => {
            state.audit_log.insert(0, event);
        }
        Action::BuyCredits { project_id, amount } => {
            let Some(project) = state.projects.iter_mut().find(|p| p.id == project_id) else {
                return state;
            };
            project.available_supply = (project.available_supply - amount).max(0.0);
            state.portfolio.credits_owned += amount;
        }
        Action::RetireCredits { amount } => {
            state.portfolio.credits_owned = (state.portfolio.credits_owned - amount).max(0.0);
        }
        Action::ResetState => return initial_state(),
    }
    state
}
