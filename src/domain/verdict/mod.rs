//! Verdict domain - Scoring, binary verdicts and explanations

mod aggregator;
mod config;
mod explanation;
mod result;

pub use aggregator::{ScoreInputs, VerdictAggregator, VerdictScore};
pub use config::VerdictConfig;
pub use explanation::{build_explanation, ExplanationInputs};
pub use result::{DegradeReason, HeuristicAnalysis, Verdict, VerdictResult};
