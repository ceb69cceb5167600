//! Usage statistics domain - Counters kept by an external collaborator

mod recorder;

pub use recorder::{RunSummary, StatsRecorder, StatsSnapshot};

#[cfg(test)]
pub use recorder::mock;
