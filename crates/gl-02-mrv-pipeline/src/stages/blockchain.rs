//! Simulated mint transaction stage

use super::{now_timestamp, Stage};
use crate::context::PipelineContext;
use crate::domain::{BlockchainOutput, PipelineResult};
use async_trait::async_trait;
use tracing::info;

pub const NETWORK: &str = "Polygon";
pub const CONFIRMED: &str = "confirmed";

/// Lowest simulated block number.
const BLOCK_BASE: f64 = 15_000_000.0;
const BLOCK_SPAN: f64 = 1_000_000.0;

/// Registry contract address: `0x` followed by forty `a`s.
pub fn contract_address() -> String {
    format!("0x{}", "a".repeat(40))
}

/// Mints the verified credits on a fake chain.
pub struct BlockchainStage;

#[async_trait]
impl Stage for BlockchainStage {
    fn name(&self) -> &'static str {
        "blockchain"
    }

    async fn run(&self, ctx: &mut PipelineContext) -> PipelineResult<()> {
        let verified_credits = ctx.require_consensus(self.name())?.verified_credits;
        info!(project_id = %ctx.project_id(), network = NETWORK, "[Blockchain] Connecting to blockchain");

        ctx.step(500).await;
        info!("[Blockchain] Contract: Carbon Credit Registry");
        ctx.step(600).await;

        let mint_amount = ctx.params().mint_amount.unwrap_or(verified_credits);
        info!(mint_amount, "[Blockchain] Preparing mint transaction");
        ctx.step(500).await;
        info!("[Blockchain] Signing transaction");
        ctx.step(400).await;
        info!("[Blockchain] Broadcasting to network");
        ctx.step(300).await;

        let tx_hash = ctx.random_hex(32);
        let block_number = (BLOCK_BASE + ctx.random() * BLOCK_SPAN).floor() as u64;
        let gas_used = format!("0.00{}{}", ctx.random_below(9), ctx.random_below(9));

        let output = BlockchainOutput {
            tx_hash,
            block_number,
            mint_amount,
            gas_used,
            network: NETWORK.to_string(),
            contract_address: contract_address(),
            timestamp: now_timestamp(),
            status: CONFIRMED.to_string(),
        };

        info!(
            tx_hash = %output.tx_hash,
            block = output.block_number,
            minted = output.mint_amount,
            gas_used = %output.gas_used,
            "[Blockchain] Transaction confirmed"
        );

        ctx.blockchain = Some(output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PipelineError, PipelineParams};
    use crate::stages::test_support::instant_context;
    use crate::stages::{BaselineStage, ConsensusStage, SatelliteStage};

    async fn run_all(params: PipelineParams) -> BlockchainOutput {
        let mut ctx = instant_context(params);
        BaselineStage.run(&mut ctx).await.unwrap();
        SatelliteStage.run(&mut ctx).await.unwrap();
        ConsensusStage.run(&mut ctx).await.unwrap();
        BlockchainStage.run(&mut ctx).await.unwrap();
        assert_eq!(
            ctx.blockchain.as_ref().map(|b| b.mint_amount),
            Some(
                ctx.params()
                    .mint_amount
                    .unwrap_or(ctx.consensus.as_ref().unwrap().verified_credits)
            )
        );
        ctx.blockchain.unwrap()
    }

    #[tokio::test]
    async fn test_transaction_shape() {
        let output = run_all(PipelineParams::default()).await;
        assert_eq!(output.tx_hash.len(), 66);
        assert!((15_000_000..16_000_000).contains(&output.block_number));
        assert_eq!(output.gas_used.len(), 6);
        assert!(output.gas_used.starts_with("0.00"));
        assert!(!output.gas_used.contains('9'));
        assert_eq!(output.network, "Polygon");
        assert_eq!(output.contract_address.len(), 42);
        assert_eq!(output.status, "confirmed");
    }

    #[tokio::test]
    async fn test_mint_amount_override() {
        let output = run_all(PipelineParams::default().with_mint_amount(40.0)).await;
        assert_eq!(output.mint_amount, 40.0);
    }

    #[tokio::test]
    async fn test_requires_consensus() {
        let mut ctx = instant_context(PipelineParams::default());
        let err = BlockchainStage.run(&mut ctx).await.unwrap_err();
        assert!(matches!(err, PipelineError::MissingStageOutput { missing: "consensus", .. }));
    }
}
