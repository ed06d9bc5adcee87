//! Registry Service - ledger operations on top of the store

use crate::domain::{
    validate_amount, Action, AppState, DashboardStats, NewProject, RegistryError,
    RegistryResult, RetirementReceipt, TradeReceipt,
};
use crate::ports::{RegistryApi, StateStorage, SystemTimeSource, TimeSource};
use crate::store::LedgerStore;
use gl_01_verification::{ReplayOutcome, VerificationApi, VerificationService};
use rand::RngCore;
use shared_types::{
    standard_verification_steps, AuditAction, AuditEvent, Project, ProjectStatus, StepStatus,
    UserRole,
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Registry Service
pub struct RegistryService<S: StateStorage> {
    store: LedgerStore<S>,
    verifier: Arc<dyn VerificationApi>,
    time_source: Box<dyn TimeSource>,
}

impl<S: StateStorage> RegistryService<S> {
    /// Open the registry over `storage` with the deterministic verifier.
    pub fn open(storage: S) -> RegistryResult<Self> {
        Ok(Self {
            store: LedgerStore::open(storage)?,
            verifier: Arc::new(VerificationService::new()),
            time_source: Box::new(SystemTimeSource),
        })
    }

    /// Set custom verifier (for testing)
    pub fn with_verifier(mut self, verifier: Arc<dyn VerificationApi>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Set custom time source (for testing)
    pub fn with_time_source(mut self, time_source: Box<dyn TimeSource>) -> Self {
        self.time_source = time_source;
        self
    }

    pub fn store(&self) -> &LedgerStore<S> {
        &self.store
    }

    fn timestamp(&self) -> String {
        self.time_source
            .now()
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }

    fn audit_event(
        &self,
        project: &Project,
        action_type: AuditAction,
        attestation_hash: Option<String>,
        details: String,
    ) -> AuditEvent {
        AuditEvent {
            id: format!("evt-{}", Uuid::new_v4()),
            timestamp: self.timestamp(),
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            attestation_hash,
            action_type,
            details,
        }
    }

    fn find(state: &AppState, project_id: &str) -> RegistryResult<Project> {
        state
            .project(project_id)
            .cloned()
            .ok_or_else(|| RegistryError::ProjectNotFound(project_id.to_string()))
    }
}

/// `0x`-prefixed 64-hex-digit fake transaction hash.
pub fn generate_tx_hash() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

impl<S: StateStorage> RegistryApi for RegistryService<S> {
    fn submit_project(&self, new: NewProject) -> RegistryResult<Project> {
        new.validate()?;

        let project = Project {
            id: format!("proj-{}", Uuid::new_v4()),
            name: new.name,
            project_type: new.project_type,
            location: new.location,
            claimed_reduction: new.claimed_reduction,
            description: new.description,
            status: ProjectStatus::Unverified,
            submitted_date: self.time_source.now().format("%Y-%m-%d").to_string(),
            attestation_hash: None,
            mint_tx_hash: None,
            evidence_hash: new.evidence_hash,
            verification_steps: standard_verification_steps(StepStatus::Pending),
            agent_results: None,
            consensus_data: None,
            available_supply: 0.0,
        };

        let event = self.audit_event(
            &project,
            AuditAction::Submission,
            None,
            format!(
                "Project \"{}\" submitted for verification. Claimed reduction: {} tons CO2e.",
                project.name, project.claimed_reduction
            ),
        );

        self.store.update(|_| {
            Ok((
                vec![Action::AddProject(project.clone()), Action::AddAuditEvent(event)],
                (),
            ))
        })?;

        info!(project_id = %project.id, name = %project.name, "Project submitted");
        Ok(project)
    }

    fn verify_project(&self, project_id: &str) -> RegistryResult<Project> {
        // Mark the project as verifying first so concurrent readers see progress.
        let (_, original) = self.store.update(|state| {
            let original = Self::find(state, project_id)?;
            if original.status != ProjectStatus::Unverified {
                return Err(RegistryError::AlreadyVerified {
                    id: original.id,
                    status: original.status,
                });
            }
            let mut verifying = original.clone();
            verifying.status = ProjectStatus::Verifying;
            verifying.verification_steps = standard_verification_steps(StepStatus::InProgress);
            Ok((vec![Action::UpdateProject(verifying)], original))
        })?;

        let outcome = match self.verifier.verify(&original) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(project_id, error = %e, "Verification failed, restoring project");
                self.store.update(|state| {
                    let still_verifying = state
                        .project(project_id)
                        .is_some_and(|p| p.status == ProjectStatus::Verifying);
                    let actions = if still_verifying {
                        vec![Action::UpdateProject(original.clone())]
                    } else {
                        Vec::new()
                    };
                    Ok((actions, ()))
                })?;
                return Err(e.into());
            }
        };

        let consensus = outcome.consensus.to_data();
        let attestation_hash = outcome.attestation_hash;

        // Rebuild from the stored record: the state may have moved on while
        // the verifier ran.
        let (_, verified) = self.store.update(|state| {
            let mut verified = Self::find(state, project_id)?;
            if verified.status != ProjectStatus::Verifying {
                return Err(RegistryError::AlreadyVerified {
                    id: verified.id,
                    status: verified.status,
                });
            }
            verified.status = outcome.consensus.status;
            verified.verification_steps = standard_verification_steps(StepStatus::Completed);
            verified.agent_results = Some(outcome.agent_results);
            verified.attestation_hash = Some(attestation_hash.clone());
            verified.mint_tx_hash = outcome.mint_tx_hash;
            verified.available_supply = consensus.final_verified_tons as f64;
            verified.consensus_data = Some(consensus);

            let event = self.audit_event(
                &verified,
                AuditAction::Verification,
                Some(attestation_hash),
                format!(
                    "Multi-agent verification completed for \"{}\". Status: {}. Verified Tons: {}",
                    verified.name,
                    verified.status,
                    verified.verified_tons()
                ),
            );

            Ok((
                vec![
                    Action::UpdateProject(verified.clone()),
                    Action::AddAuditEvent(event),
                ],
                verified,
            ))
        })?;

        info!(
            project_id,
            status = %verified.status,
            verified_tons = verified.verified_tons(),
            "Project verified"
        );
        Ok(verified)
    }

    fn replay_project(&self, project_id: &str) -> RegistryResult<ReplayOutcome> {
        let project = self.store.read(|state| Self::find(state, project_id))?;
        Ok(self.verifier.replay(&project)?)
    }

    fn buy_credits(&self, project_id: &str, amount: f64) -> RegistryResult<TradeReceipt> {
        validate_amount(amount)?;
        let tx_hash = generate_tx_hash();

        let (state, project) = self.store.update(|state| {
            let project = Self::find(state, project_id)?;
            if !project.status.is_tradeable() {
                return Err(RegistryError::NotTradeable {
                    id: project.id,
                    status: project.status,
                });
            }
            if amount > project.available_supply {
                return Err(RegistryError::InsufficientSupply {
                    requested: amount,
                    available: project.available_supply,
                });
            }

            let event = self.audit_event(
                &project,
                AuditAction::Trade,
                project.attestation_hash.clone(),
                format!(
                    "Purchased {} credits from \"{}\". Tx: {}",
                    amount, project.name, tx_hash
                ),
            );
            Ok((
                vec![
                    Action::BuyCredits {
                        project_id: project.id.clone(),
                        amount,
                    },
                    Action::AddAuditEvent(event),
                ],
                project,
            ))
        })?;

        let available_supply = state
            .project(project_id)
            .map(|p| p.available_supply)
            .unwrap_or_default();
        info!(project_id, amount, tx_hash = %tx_hash, "Credits purchased");

        Ok(TradeReceipt {
            project_id: project.id,
            amount,
            tx_hash,
            available_supply,
            credits_owned: state.portfolio.credits_owned,
        })
    }

    fn retire_credits(&self, project_id: &str, amount: f64) -> RegistryResult<RetirementReceipt> {
        validate_amount(amount)?;
        let burn_hash = generate_tx_hash();

        let (state, project) = self.store.update(|state| {
            let project = Self::find(state, project_id)?;
            let owned = state.portfolio.credits_owned;
            if amount > owned {
                return Err(RegistryError::InsufficientCredits {
                    requested: amount,
                    owned,
                });
            }

            let event = self.audit_event(
                &project,
                AuditAction::Retirement,
                project.attestation_hash.clone(),
                format!(
                    "Retired {} credits of \"{}\". Burn tx: {}",
                    amount, project.name, burn_hash
                ),
            );
            Ok((
                vec![Action::RetireCredits { amount }, Action::AddAuditEvent(event)],
                project,
            ))
        })?;

        info!(project_id, amount, burn_hash = %burn_hash, "Credits retired");
        Ok(RetirementReceipt {
            project_id: project.id,
            amount,
            burn_hash,
            credits_owned: state.portfolio.credits_owned,
        })
    }

    fn set_role(&self, role: UserRole) -> RegistryResult<UserRole> {
        let state = self.store.dispatch(Action::SetUserRole(role))?;
        info!(role = %state.user_role, "User role changed");
        Ok(state.user_role)
    }

    fn reset(&self) -> RegistryResult<AppState> {
        let state = self.store.dispatch(Action::ResetState)?;
        warn!("Ledger state reset to initial state");
        Ok(state)
    }

    fn projects(&self) -> Vec<Project> {
        self.store.read(|state| state.projects.clone())
    }

    fn project(&self, project_id: &str) -> RegistryResult<Project> {
        self.store.read(|state| Self::find(state, project_id))
    }

    fn audit_log(&self) -> Vec<AuditEvent> {
        self.store.read(|state| state.audit_log.clone())
    }

    fn dashboard(&self) -> DashboardStats {
        self.store.read(|state| DashboardStats {
            active_projects: state.projects.len(),
            verified_tons: state.projects.iter().map(Project::verified_tons).sum(),
            credits_owned: state.portfolio.credits_owned,
            audit_events: state.audit_log.len(),
        })
    }

    fn state(&self) -> AppState {
        self.store.snapshot()
    }
}
