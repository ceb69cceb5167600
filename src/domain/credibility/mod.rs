//! Credibility domain - Trust weights for evidence source domains

mod table;

pub use table::{
    normalize_domain, CredibilityConfig, CredibilityTable, SuffixTier, DEFAULT_CREDIBILITY,
};
