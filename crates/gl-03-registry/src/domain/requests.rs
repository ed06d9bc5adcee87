//! Operation inputs and read models

use super::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

/// A project as submitted by its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub location: String,
    pub claimed_reduction: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub evidence_hash: Option<String>,
}

impl NewProject {
    pub fn validate(&self) -> RegistryResult<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::InvalidProject("name is required".to_string()));
        }
        if !self.claimed_reduction.is_finite() || self.claimed_reduction <= 0.0 {
            return Err(RegistryError::InvalidProject(format!(
                "claimed reduction must be positive, got {}",
                self.claimed_reduction
            )));
        }
        Ok(())
    }
}

/// Headline figures of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_projects: usize,
    /// Sum of final verified tons across projects.
    pub verified_tons: i64,
    pub credits_owned: f64,
    pub audit_events: usize,
}

/// Outcome of a credit purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeReceipt {
    pub project_id: String,
    pub amount: f64,
    pub tx_hash: String,
    pub available_supply: f64,
    pub credits_owned: f64,
}

/// Outcome of a credit retirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementReceipt {
    pub project_id: String,
    pub amount: f64,
    pub burn_hash: String,
    pub credits_owned: f64,
}

/// Reject zero, negative and non-finite amounts.
pub fn validate_amount(amount: f64) -> RegistryResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(RegistryError::InvalidAmount(amount))
    }
}
