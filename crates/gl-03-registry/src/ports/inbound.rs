//! Driving ports (Inbound API)

use crate::domain::{
    AppState, DashboardStats, NewProject, RegistryResult, RetirementReceipt, TradeReceipt,
};
use gl_01_verification::ReplayOutcome;
use shared_types::{AuditEvent, Project, UserRole};

/// Primary Registry API
pub trait RegistryApi: Send + Sync {
    /// Register a new unverified project.
    fn submit_project(&self, project: NewProject) -> RegistryResult<Project>;

    /// Run deterministic verification and record the result.
    fn verify_project(&self, project_id: &str) -> RegistryResult<Project>;

    /// Recompute a stored attestation hash.
    fn replay_project(&self, project_id: &str) -> RegistryResult<ReplayOutcome>;

    /// Buy credits from a tradeable project.
    fn buy_credits(&self, project_id: &str, amount: f64) -> RegistryResult<TradeReceipt>;

    /// Permanently retire owned credits.
    fn retire_credits(&self, project_id: &str, amount: f64) -> RegistryResult<RetirementReceipt>;

    fn set_role(&self, role: UserRole) -> RegistryResult<UserRole>;

    /// Restore the initial state.
    fn reset(&self) -> RegistryResult<AppState>;

    fn projects(&self) -> Vec<Project>;

    fn project(&self, project_id: &str) -> RegistryResult<Project>;

    fn audit_log(&self) -> Vec<AuditEvent>;

    fn dashboard(&self) -> DashboardStats;

    fn state(&self) -> AppState;
}
