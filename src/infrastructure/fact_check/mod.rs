//! Fact-check engine - Orchestrates claim evaluation

mod config;
mod orchestrator;
mod phase;

pub use config::EngineConfig;
pub use orchestrator::FactCheckOrchestrator;
pub use phase::RequestPhase;
