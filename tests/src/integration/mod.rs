//! Cross-crate integration flows

mod http_flows;
mod ledger_flows;
mod pipeline_flows;
