//! Infrastructure layer - External service implementations

pub mod evidence;
pub mod fact_check;
pub mod logging;
pub mod observability;
pub mod stats;
