//! Per-language misinformation lexicons
//!
//! Each supported language gets its own set of phrase lists. The detector
//! picks one by the claim's detected language and never branches on the
//! language itself.

use std::collections::HashMap;

use regex::Regex;

use crate::domain::claim::DEFAULT_LANGUAGE;

/// Phrase lists for one language
#[derive(Debug, Clone)]
pub struct LexiconTerms {
    pub absolute: &'static [&'static str],
    pub emotional: &'static [&'static str],
    pub attribution: &'static [&'static str],
    pub clickbait: &'static [&'static str],
}

const ENGLISH: LexiconTerms = LexiconTerms {
    absolute: &[
        "always",
        "never",
        "everyone",
        "everybody",
        "nobody",
        "100%",
        "completely",
        "totally",
        "absolutely",
        "undeniable",
        "undeniably",
        "without exception",
        "every single",
    ],
    emotional: &[
        "outrageous",
        "outrage",
        "horrifying",
        "terrifying",
        "disgusting",
        "unbelievable",
        "shocking",
        "wake up",
        "evil",
        "catastrophic",
        "must see",
        "you won't believe",
        "share before",
        "before it's deleted",
    ],
    attribution: &[
        "sources say",
        "sources said",
        "experts say",
        "they don't want you to know",
        "people are saying",
        "rumor has it",
        "it is rumored",
        "insiders claim",
        "allegedly",
        "some say",
        "word is",
    ],
    clickbait: &[
        "secret",
        "they don't want you to know",
        "doctors hate",
        "shocking truth",
        "miracle cure",
        "guaranteed",
        "breaking news exclusive",
        "this one trick",
    ],
};

const SPANISH: LexiconTerms = LexiconTerms {
    absolute: &[
        "siempre",
        "nunca",
        "todos",
        "nadie",
        "100%",
        "totalmente",
        "completamente",
        "absolutamente",
    ],
    emotional: &[
        "impactante",
        "indignante",
        "escandaloso",
        "aterrador",
        "increíble",
        "despierta",
    ],
    attribution: &[
        "fuentes dicen",
        "según fuentes",
        "no quieren que sepas",
        "se rumorea",
        "dicen que",
        "supuestamente",
    ],
    clickbait: &[
        "secreto",
        "cura milagrosa",
        "los médicos odian",
        "verdad impactante",
        "garantizado",
        "este truco",
    ],
};

const FRENCH: LexiconTerms = LexiconTerms {
    absolute: &[
        "toujours",
        "jamais",
        "tout le monde",
        "100%",
        "totalement",
        "complètement",
        "absolument",
    ],
    emotional: &[
        "choquant",
        "scandaleux",
        "terrifiant",
        "incroyable",
        "honteux",
        "réveillez-vous",
    ],
    attribution: &[
        "des sources disent",
        "selon des sources",
        "ils ne veulent pas que vous sachiez",
        "on dit que",
        "il paraît que",
        "prétendument",
    ],
    clickbait: &[
        "secret",
        "remède miracle",
        "les médecins détestent",
        "vérité choquante",
        "garanti",
        "cette astuce",
    ],
};

const GERMAN: LexiconTerms = LexiconTerms {
    absolute: &[
        "immer",
        "niemals",
        "nie",
        "niemand",
        "100%",
        "völlig",
        "absolut",
    ],
    emotional: &[
        "schockierend",
        "skandalös",
        "erschreckend",
        "unglaublich",
        "empörend",
        "wacht auf",
    ],
    attribution: &[
        "quellen sagen",
        "laut quellen",
        "sie wollen nicht, dass du es weißt",
        "man sagt",
        "angeblich",
        "gerüchten zufolge",
    ],
    clickbait: &[
        "geheim",
        "wundermittel",
        "ärzte hassen",
        "schockierende wahrheit",
        "garantiert",
        "dieser eine trick",
    ],
};

/// Compiled matchers for one language
#[derive(Debug, Clone)]
pub struct Lexicon {
    language: String,
    absolute: Regex,
    emotional: Regex,
    attribution: Regex,
    clickbait: Regex,
}

impl Lexicon {
    pub fn compile(language: impl Into<String>, terms: &LexiconTerms) -> Self {
        Self {
            language: language.into(),
            absolute: phrase_matcher(terms.absolute),
            emotional: phrase_matcher(terms.emotional),
            attribution: phrase_matcher(terms.attribution),
            clickbait: phrase_matcher(terms.clickbait),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn has_absolute(&self, text: &str) -> bool {
        self.absolute.is_match(text)
    }

    pub fn has_emotional(&self, text: &str) -> bool {
        self.emotional.is_match(text)
    }

    pub fn has_attribution(&self, text: &str) -> bool {
        self.attribution.is_match(text)
    }

    pub fn has_clickbait(&self, text: &str) -> bool {
        self.clickbait.is_match(text)
    }
}

/// Case-insensitive alternation of phrases, anchored on non-word characters
/// so that "never" does not match inside "nevertheless" while "100%" still
/// matches before a space.
fn phrase_matcher(phrases: &[&str]) -> Regex {
    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(r"(?i)(?:^|[^\p{{L}}\p{{N}}_])(?:{})(?:$|[^\p{{L}}\p{{N}}_])", alternation);

    Regex::new(&pattern).expect("escaped phrases form a valid pattern")
}

/// Lexicons keyed by language code with an English fallback
#[derive(Debug, Clone)]
pub struct LexiconRegistry {
    lexicons: HashMap<String, Lexicon>,
    fallback: Lexicon,
}

impl LexiconRegistry {
    pub fn new() -> Self {
        let mut lexicons = HashMap::new();

        for (code, terms) in [("es", &SPANISH), ("fr", &FRENCH), ("de", &GERMAN)] {
            lexicons.insert(code.to_string(), Lexicon::compile(code, terms));
        }

        Self {
            lexicons,
            fallback: Lexicon::compile(DEFAULT_LANGUAGE, &ENGLISH),
        }
    }

    /// Register or replace the lexicon for a language
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        let code = normalize_language(lexicon.language());

        if code == DEFAULT_LANGUAGE {
            self.fallback = lexicon;
        } else {
            self.lexicons.insert(code, lexicon);
        }
        self
    }

    /// Lexicon for a language code such as "es" or "pt-BR"
    pub fn for_language(&self, language: &str) -> &Lexicon {
        self.lexicons
            .get(&normalize_language(language))
            .unwrap_or(&self.fallback)
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.lexicons.keys().map(String::as_str).collect();
        languages.push(self.fallback.language());
        languages.sort_unstable();
        languages
    }
}

impl Default for LexiconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Primary subtag of a language code, lower-cased
fn normalize_language(language: &str) -> String {
    language
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_matcher_word_boundaries() {
        let matcher = phrase_matcher(&["never", "100%"]);

        assert!(matcher.is_match("This will never happen"));
        assert!(matcher.is_match("NEVER again"));
        assert!(matcher.is_match("It is 100% safe"));
        assert!(!matcher.is_match("Nevertheless it happened"));
        assert!(!matcher.is_match("It is 1100% bigger"));
    }

    #[test]
    fn test_registry_selects_language() {
        let registry = LexiconRegistry::new();

        assert_eq!(registry.for_language("es").language(), "es");
        assert_eq!(registry.for_language("FR-ca").language(), "fr");
        assert_eq!(registry.for_language("de_DE").language(), "de");
    }

    #[test]
    fn test_registry_falls_back_to_english() {
        let registry = LexiconRegistry::new();

        assert_eq!(registry.for_language("ja").language(), "en");
        assert_eq!(registry.for_language("").language(), "en");
    }

    #[test]
    fn test_languages_listed() {
        let registry = LexiconRegistry::new();
        assert_eq!(registry.languages(), vec!["de", "en", "es", "fr"]);
    }

    #[test]
    fn test_custom_lexicon_registration() {
        const PORTUGUESE: LexiconTerms = LexiconTerms {
            absolute: &["sempre", "nunca"],
            emotional: &["chocante"],
            attribution: &["fontes dizem"],
            clickbait: &["cura milagrosa"],
        };

        let registry = LexiconRegistry::new().with_lexicon(Lexicon::compile("pt", &PORTUGUESE));
        let lexicon = registry.for_language("pt-BR");

        assert_eq!(lexicon.language(), "pt");
        assert!(lexicon.has_absolute("isso sempre acontece"));
        assert!(lexicon.has_clickbait("uma cura milagrosa"));
    }

    #[test]
    fn test_spanish_lexicon_matches_accented_terms() {
        let registry = LexiconRegistry::new();
        let lexicon = registry.for_language("es");

        assert!(lexicon.has_emotional("Una noticia increíble"));
        assert!(lexicon.has_clickbait("Los médicos odian este remedio"));
        assert!(!lexicon.has_absolute("Se anunció ayer"));
    }
}
