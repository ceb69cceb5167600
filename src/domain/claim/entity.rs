//! Claim entity and related types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Language assumed when the upstream collaborator did not detect one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Extraction confidence assumed when none was supplied
pub const DEFAULT_EXTRACTION_CONFIDENCE: f64 = 0.5;

static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Overall sentiment of a claim as detected upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Whether the sentiment carries emotional charge
    pub fn is_charged(&self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Character span of an entity inside the claim text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Named entity recognised in a claim. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub span: Span,
}

impl Entity {
    pub fn new(
        text: impl Into<String>,
        entity_type: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            text: text.into(),
            entity_type: entity_type.into(),
            span: Span { start, end },
        }
    }

    /// Check the entity type case-insensitively
    pub fn is_type(&self, entity_type: &str) -> bool {
        self.entity_type.eq_ignore_ascii_case(entity_type)
    }
}

/// A single factual assertion to be verified.
///
/// Claims are produced upstream and never mutated by the engine. Within a
/// request a claim is identified by its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
    pub language: String,
    pub entities: Vec<Entity>,
    pub sentiment: Sentiment,
    pub extraction_confidence: f64,
}

impl Claim {
    /// Create a claim with default metadata
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            entities: Vec::new(),
            sentiment: Sentiment::default(),
            extraction_confidence: DEFAULT_EXTRACTION_CONFIDENCE,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_extraction_confidence(mut self, confidence: f64) -> Self {
        self.extraction_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Whether the claim mentions any number
    pub fn has_numbers(&self) -> bool {
        DIGIT_PATTERN.is_match(&self.text)
    }

    pub fn has_entities(&self) -> bool {
        !self.entities.is_empty()
    }

    /// Claim text shortened for log lines
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.text.chars().take(max_chars).collect();
        if self.text.chars().count() > max_chars {
            preview.push_str("...");
        }
        preview
    }
}
