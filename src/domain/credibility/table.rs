//! Domain credibility table

use std::collections::HashMap;

use serde::Deserialize;

/// Weight assigned to domains with no table entry and no matching suffix tier
pub const DEFAULT_CREDIBILITY: f64 = 0.5;

/// Known fact-checking, wire and news domains with their trust weights
const SEED_DOMAINS: &[(&str, f64)] = &[
    ("factcheck.org", 0.98),
    ("who.int", 0.97),
    ("cdc.gov", 0.97),
    ("politifact.com", 0.96),
    ("nature.com", 0.96),
    ("science.org", 0.96),
    ("reuters.com", 0.95),
    ("apnews.com", 0.95),
    ("snopes.com", 0.95),
    ("bbc.com", 0.92),
    ("bbc.co.uk", 0.92),
    ("npr.org", 0.90),
    ("nytimes.com", 0.88),
    ("washingtonpost.com", 0.88),
    ("theguardian.com", 0.87),
    ("wsj.com", 0.87),
    ("cnn.com", 0.85),
    ("bloomberg.com", 0.85),
];

/// Fallback weights by top-level suffix, checked in order
const SEED_SUFFIX_TIERS: &[(&str, f64)] = &[(".gov", 0.90), (".edu", 0.85), (".org", 0.70)];

/// Credibility overrides supplied at deployment time
#[derive(Debug, Clone, Deserialize)]
pub struct CredibilityConfig {
    #[serde(default = "default_weight")]
    pub default_weight: f64,
    /// Extra or replacement domain weights merged over the seed table
    #[serde(default)]
    pub domains: HashMap<String, f64>,
    /// Replaces the seed suffix tiers when set
    #[serde(default)]
    pub suffix_tiers: Option<Vec<SuffixTier>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuffixTier {
    pub suffix: String,
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_CREDIBILITY
}

impl Default for CredibilityConfig {
    fn default() -> Self {
        Self {
            default_weight: default_weight(),
            domains: HashMap::new(),
            suffix_tiers: None,
        }
    }
}

/// Immutable mapping from source domain to a trust weight in [0, 1].
///
/// Built once at startup and shared read-only between claim evaluations.
#[derive(Debug, Clone)]
pub struct CredibilityTable {
    domains: HashMap<String, f64>,
    suffix_tiers: Vec<(String, f64)>,
    default_weight: f64,
}

impl CredibilityTable {
    /// Empty table where every lookup yields the default weight
    pub fn empty() -> Self {
        Self {
            domains: HashMap::new(),
            suffix_tiers: Vec::new(),
            default_weight: DEFAULT_CREDIBILITY,
        }
    }

    /// Table seeded with the built-in domains and suffix tiers
    pub fn seeded() -> Self {
        let domains = SEED_DOMAINS
            .iter()
            .map(|(domain, weight)| (domain.to_string(), *weight))
            .collect();
        let suffix_tiers = SEED_SUFFIX_TIERS
            .iter()
            .map(|(suffix, weight)| (suffix.to_string(), *weight))
            .collect();

        Self {
            domains,
            suffix_tiers,
            default_weight: DEFAULT_CREDIBILITY,
        }
    }

    /// Seeded table with deployment overrides applied
    pub fn from_config(config: &CredibilityConfig) -> Self {
        let mut table = Self::seeded().with_default_weight(config.default_weight);

        for (domain, weight) in &config.domains {
            table = table.with_domain(domain, *weight);
        }

        if let Some(tiers) = &config.suffix_tiers {
            table.suffix_tiers.clear();
            for tier in tiers {
                table = table.with_suffix_tier(&tier.suffix, tier.weight);
            }
        }

        table
    }

    pub fn with_domain(mut self, domain: &str, weight: f64) -> Self {
        self.domains
            .insert(normalize_domain(domain), weight.clamp(0.0, 1.0));
        self
    }

    pub fn with_suffix_tier(mut self, suffix: &str, weight: f64) -> Self {
        let suffix = suffix.trim().to_lowercase();
        let suffix = if suffix.starts_with('.') {
            suffix
        } else {
            format!(".{}", suffix)
        };

        self.suffix_tiers.push((suffix, weight.clamp(0.0, 1.0)));
        self
    }

    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight.clamp(0.0, 1.0);
        self
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Look up the weight for a domain or URL.
    ///
    /// Subdomains inherit the weight of the closest listed parent
    /// (`edition.cnn.com` resolves to `cnn.com`); matching is on label
    /// boundaries only.
    pub fn lookup(&self, domain: &str) -> f64 {
        let domain = normalize_domain(domain);

        if domain.is_empty() {
            return self.default_weight;
        }

        let mut candidate = domain.as_str();

        loop {
            if let Some(weight) = self.domains.get(candidate) {
                return *weight;
            }

            match candidate.split_once('.') {
                Some((_, parent)) if parent.contains('.') => candidate = parent,
                _ => break,
            }
        }

        self.suffix_tiers
            .iter()
            .find(|(suffix, _)| domain.ends_with(suffix.as_str()))
            .map(|(_, weight)| *weight)
            .unwrap_or(self.default_weight)
    }
}

impl Default for CredibilityTable {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Normalize a URL or host into a bare lower-case domain without `www.`
pub fn normalize_domain(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);

    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.rsplit_once('@').map(|(_, h)| h).unwrap_or(host);
    let host = host.split(':').next().unwrap_or_default();
    let host = host.trim_end_matches('.').to_lowercase();

    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("https://www.Reuters.com/world/x"), "reuters.com");
        assert_eq!(normalize_domain("WWW.BBC.co.uk"), "bbc.co.uk");
        assert_eq!(normalize_domain("http://user@example.org:8080/path?q=1"), "example.org");
        assert_eq!(normalize_domain("apnews.com/article#frag"), "apnews.com");
        assert_eq!(normalize_domain(""), "");
    }

    #[test]
    fn test_seeded_lookup() {
        let table = CredibilityTable::seeded();

        assert_eq!(table.lookup("factcheck.org"), 0.98);
        assert_eq!(table.lookup("https://www.reuters.com/article/abc"), 0.95);
        assert_eq!(table.lookup("www.cnn.com"), 0.85);
    }

    #[test]
    fn test_subdomain_inherits_parent_weight() {
        let table = CredibilityTable::seeded();
        assert_eq!(table.lookup("edition.cnn.com"), 0.85);
        assert_eq!(table.lookup("news.bbc.co.uk"), 0.92);
    }

    #[test]
    fn test_no_substring_matching() {
        let table = CredibilityTable::seeded();
        // Contains "cnn.com" as a substring but is a different registrable domain
        assert_eq!(table.lookup("fakecnn.com"), DEFAULT_CREDIBILITY);
    }

    #[test]
    fn test_suffix_tiers() {
        let table = CredibilityTable::seeded();

        assert_eq!(table.lookup("nasa.gov"), 0.90);
        assert_eq!(table.lookup("cdc.gov"), 0.97);
        assert_eq!(table.lookup("mit.edu"), 0.85);
        assert_eq!(table.lookup("wikipedia.org"), 0.70);
    }

    #[test]
    fn test_unknown_domain_gets_default() {
        let table = CredibilityTable::seeded();
        assert_eq!(table.lookup("some-random-blog.net"), 0.5);
        assert_eq!(table.lookup(""), 0.5);
    }

    #[test]
    fn test_config_overrides() {
        let mut domains = HashMap::new();
        domains.insert("www.Example.net".to_string(), 0.8);
        domains.insert("cnn.com".to_string(), 1.4);

        let config = CredibilityConfig {
            default_weight: 0.3,
            domains,
            suffix_tiers: Some(vec![SuffixTier {
                suffix: "int".to_string(),
                weight: 0.9,
            }]),
        };

        let table = CredibilityTable::from_config(&config);

        assert_eq!(table.lookup("example.net"), 0.8);
        assert_eq!(table.lookup("cnn.com"), 1.0);
        assert_eq!(table.lookup("nato.int"), 0.9);
        assert_eq!(table.lookup("nasa.gov"), 0.3);
        assert_eq!(table.default_weight(), 0.3);
    }

    #[test]
    fn test_empty_table() {
        let table = CredibilityTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("reuters.com"), DEFAULT_CREDIBILITY);
    }
}
