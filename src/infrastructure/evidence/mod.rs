//! Evidence provider implementations and concurrent retrieval

mod config;
mod fact_check_db;
mod factory;
mod fixture;
mod gatherer;
pub mod http_client;
mod web_search;

pub use config::{FactCheckConfig, ProvidersConfig, WebSearchConfig};
pub use fact_check_db::GoogleFactCheckProvider;
pub use factory::EvidenceProviderFactory;
pub use fixture::{EvidenceFixture, FixtureEntry, FixtureSource, StaticEvidenceProvider};
pub use gatherer::{EvidenceGatherer, GatheredEvidence, ProviderOutcome, ProviderStatus};
pub use http_client::{HttpClient, HttpClientTrait};
pub use web_search::GoogleSearchProvider;
