//! Red-flag detection
//!
//! Counts independent heuristic indicators correlated with misinformation.
//! Each indicator contributes at most one flag no matter how often it
//! matches, and indicators are not mutually exclusive.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::LexiconRegistry;
use crate::domain::claim::Claim;

/// Minimum letters before capitalization ratio is considered
const MIN_LETTERS_FOR_CAPS_RATIO: usize = 12;

/// Share of upper-case letters regarded as shouting
const SHOUTING_RATIO: f64 = 0.6;

/// All-caps words (of at least four letters) regarded as shouting
const SHOUTING_WORDS: usize = 3;

/// Exclamation marks regarded as excessive
const EXCLAMATION_LIMIT: usize = 3;

static REPEATED_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!?]{2,}").unwrap());

/// A heuristic misinformation indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlagIndicator {
    /// "always", "never", "100%"
    AbsoluteLanguage,
    /// Outrage, fear and urgency markers
    EmotionalManipulation,
    /// "sources say", "they don't want you to know"
    UnverifiedAttribution,
    /// Miracle cures, secrets, "this one trick"
    ClickbaitPhrase,
    /// Repeated "!!" / "?!" or many exclamation marks
    ExcessivePunctuation,
    /// Shouting in capitals
    ExcessiveCapitalization,
}

impl RedFlagIndicator {
    pub const ALL: [RedFlagIndicator; 6] = [
        Self::AbsoluteLanguage,
        Self::EmotionalManipulation,
        Self::UnverifiedAttribution,
        Self::ClickbaitPhrase,
        Self::ExcessivePunctuation,
        Self::ExcessiveCapitalization,
    ];
}

/// Indicators that matched for one claim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedFlagReport {
    pub indicators: Vec<RedFlagIndicator>,
}

impl RedFlagReport {
    pub fn count(&self) -> u32 {
        self.indicators.len() as u32
    }

    pub fn is_clean(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn contains(&self, indicator: RedFlagIndicator) -> bool {
        self.indicators.contains(&indicator)
    }
}

/// Scans claim text for misinformation indicators
#[derive(Debug, Clone, Default)]
pub struct RedFlagDetector {
    lexicons: LexiconRegistry,
}

impl RedFlagDetector {
    pub fn new(lexicons: LexiconRegistry) -> Self {
        Self { lexicons }
    }

    /// Scan the claim text only
    pub fn detect(&self, claim: &Claim) -> RedFlagReport {
        self.scan(&claim.language, &claim.text)
    }

    /// Scan the claim text together with evidence snippets.
    ///
    /// The combined text is evaluated once, so each indicator still counts
    /// at most one flag.
    pub fn detect_with_evidence<'a>(
        &self,
        claim: &Claim,
        snippets: impl IntoIterator<Item = &'a str>,
    ) -> RedFlagReport {
        let mut combined = claim.text.clone();

        for snippet in snippets {
            combined.push('\n');
            combined.push_str(snippet);
        }

        self.scan(&claim.language, &combined)
    }

    fn scan(&self, language: &str, text: &str) -> RedFlagReport {
        let text = normalize_quotes(text);
        let lexicon = self.lexicons.for_language(language);

        let indicators = RedFlagIndicator::ALL
            .into_iter()
            .filter(|indicator| match indicator {
                RedFlagIndicator::AbsoluteLanguage => lexicon.has_absolute(&text),
                RedFlagIndicator::EmotionalManipulation => lexicon.has_emotional(&text),
                RedFlagIndicator::UnverifiedAttribution => lexicon.has_attribution(&text),
                RedFlagIndicator::ClickbaitPhrase => lexicon.has_clickbait(&text),
                RedFlagIndicator::ExcessivePunctuation => has_excessive_punctuation(&text),
                RedFlagIndicator::ExcessiveCapitalization => has_excessive_capitalization(&text),
            })
            .collect();

        RedFlagReport { indicators }
    }
}

/// Replace typographic apostrophes so "don’t" matches "don't"
fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'")
}

fn has_excessive_punctuation(text: &str) -> bool {
    REPEATED_PUNCTUATION.is_match(text) || text.matches('!').count() >= EXCLAMATION_LIMIT
}

fn has_excessive_capitalization(text: &str) -> bool {
    let shouted_words = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphabetic()))
        .filter(|w| w.chars().count() >= 4 && w.chars().all(|c| c.is_uppercase()))
        .count();

    if shouted_words >= SHOUTING_WORDS {
        return true;
    }

    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();

    if letters.len() < MIN_LETTERS_FOR_CAPS_RATIO {
        return false;
    }

    let upper = letters.iter().filter(|c| c.is_uppercase()).count();
    upper as f64 / letters.len() as f64 >= SHOUTING_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> RedFlagDetector {
        RedFlagDetector::default()
    }

    #[test]
    fn test_clean_claim() {
        let claim = Claim::new("The central bank raised interest rates by 0.25 points on Wednesday.");
        let report = detector().detect(&claim);

        assert!(report.is_clean());
        assert_eq!(report.count(), 0);
    }

    #[test]
    fn test_absolute_language() {
        let claim = Claim::new("This vaccine is 100% effective");
        let report = detector().detect(&claim);

        assert_eq!(report.indicators, vec![RedFlagIndicator::AbsoluteLanguage]);
    }

    #[test]
    fn test_indicator_counts_once_regardless_of_repetition() {
        let claim = Claim::new("It always works, it always has, it always will");
        assert_eq!(detector().detect(&claim).count(), 1);
    }

    #[test]
    fn test_independent_indicators_accumulate() {
        let claim = Claim::new(
            "SHOCKING!!! Sources say this miracle cure ALWAYS works and DOCTORS are furious",
        );
        let report = detector().detect(&claim);

        assert!(report.contains(RedFlagIndicator::AbsoluteLanguage));
        assert!(report.contains(RedFlagIndicator::EmotionalManipulation));
        assert!(report.contains(RedFlagIndicator::UnverifiedAttribution));
        assert!(report.contains(RedFlagIndicator::ClickbaitPhrase));
        assert!(report.contains(RedFlagIndicator::ExcessivePunctuation));
        assert!(report.contains(RedFlagIndicator::ExcessiveCapitalization));
        assert_eq!(report.count(), 6);
    }

    #[test]
    fn test_typographic_apostrophe() {
        let claim = Claim::new("What they don\u{2019}t want you to know about tap water");
        let report = detector().detect(&claim);

        assert!(report.contains(RedFlagIndicator::UnverifiedAttribution));
        assert!(report.contains(RedFlagIndicator::ClickbaitPhrase));
    }

    #[test]
    fn test_acronyms_are_not_shouting() {
        let claim = Claim::new("The WHO and NASA published a joint report on air quality");
        assert!(!detector()
            .detect(&claim)
            .contains(RedFlagIndicator::ExcessiveCapitalization));
    }

    #[test]
    fn test_excessive_punctuation() {
        assert!(has_excessive_punctuation("Really?!"));
        assert!(has_excessive_punctuation("Wow! Amazing! Unreal!"));
        assert!(!has_excessive_punctuation("Prices rose. Was it expected?"));
    }

    #[test]
    fn test_language_strategy_selected_by_claim() {
        let spanish = Claim::new("Los médicos odian esta cura milagrosa").with_language("es");
        let report = detector().detect(&spanish);
        assert!(report.contains(RedFlagIndicator::ClickbaitPhrase));

        // English lexicon does not know the Spanish phrase
        let mislabelled = Claim::new("Los médicos odian esta cura milagrosa").with_language("en");
        assert!(detector().detect(&mislabelled).is_clean());
    }

    #[test]
    fn test_detect_with_evidence_snippets() {
        let claim = Claim::new("The bridge reopened on Monday");
        let snippets = vec!["Sources say the bridge is unsafe", "Officials confirmed reopening"];

        let report = detector().detect_with_evidence(&claim, snippets);
        assert_eq!(report.indicators, vec![RedFlagIndicator::UnverifiedAttribution]);
    }
}
