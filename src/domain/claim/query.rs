//! Search query construction from claim text
//!
//! Evidence providers work best with short keyword queries, so long claims
//! are condensed into their most searchable terms before retrieval.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Claim;

/// Claims at or under this many words are searched verbatim
const VERBATIM_WORD_LIMIT: usize = 15;

/// A first sentence at or under this many words is used as the query
const FIRST_SENTENCE_WORD_LIMIT: usize = 12;

const MAX_ENTITY_TERMS: usize = 4;
const MAX_CAPITALIZED_TERMS: usize = 5;
const MAX_NUMBER_TERMS: usize = 2;
const MAX_QUOTED_TERMS: usize = 2;
const ACTION_WORD_CUTOFF: usize = 12;
const MAX_QUERY_TERMS: usize = 15;
const MIN_KEY_TERMS: usize = 3;

const FALLBACK_WINDOW_WORDS: usize = 50;
const MAX_FALLBACK_WORDS: usize = 12;

const SEARCHABLE_ENTITY_TYPES: &[&str] = &["PERSON", "ORG", "GPE", "EVENT", "DATE"];

const ACTION_WORDS: &[&str] = &[
    "protest",
    "announced",
    "said",
    "reported",
    "claims",
    "election",
    "government",
    "security",
    "attack",
    "fled",
    "exile",
    "summoned",
];

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "it", "its", "this",
    "that",
];

static CAPITALIZED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap());

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:\d{1,2}\s+)?(?:January|February|March|April|May|June|July|August|September|October|November|December|\d+)\b",
    )
    .unwrap()
});

static QUOTED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).unwrap());

/// Build the search query used for evidence retrieval
pub fn build_search_query(claim: &Claim) -> String {
    let text = claim.text.trim();
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() <= VERBATIM_WORD_LIMIT {
        return text.to_string();
    }

    if let Some(first_sentence) = text.split('.').next().map(str::trim) {
        let sentence_words = first_sentence.split_whitespace().count();

        if sentence_words > 0 && sentence_words <= FIRST_SENTENCE_WORD_LIMIT {
            return first_sentence.to_string();
        }
    }

    let terms = collect_key_terms(claim);

    if terms.len() >= MIN_KEY_TERMS {
        return terms
            .into_iter()
            .take(MAX_QUERY_TERMS)
            .collect::<Vec<_>>()
            .join(" ");
    }

    fallback_query(&words)
}

fn collect_key_terms(claim: &Claim) -> Vec<String> {
    let text = claim.text.as_str();
    let mut terms: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let mut push_unique = |term: &str, terms: &mut Vec<String>| {
        if seen.insert(term.to_lowercase()) {
            terms.push(term.to_string());
        }
    };

    let entity_terms = claim
        .entities
        .iter()
        .filter(|e| SEARCHABLE_ENTITY_TYPES.iter().any(|t| e.is_type(t)))
        .take(MAX_ENTITY_TERMS);

    for entity in entity_terms {
        push_unique(&entity.text, &mut terms);
    }

    for capitalized in CAPITALIZED_PATTERN
        .find_iter(text)
        .take(MAX_CAPITALIZED_TERMS)
    {
        push_unique(capitalized.as_str(), &mut terms);
    }

    for number in NUMBER_PATTERN.find_iter(text).take(MAX_NUMBER_TERMS) {
        push_unique(number.as_str(), &mut terms);
    }

    for quoted in QUOTED_PATTERN
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .take(MAX_QUOTED_TERMS)
    {
        push_unique(quoted.as_str(), &mut terms);
    }

    let lowered = text.to_lowercase();

    for action in ACTION_WORDS {
        if terms.len() >= ACTION_WORD_CUTOFF {
            break;
        }
        if lowered.contains(action) {
            push_unique(*action, &mut terms);
        }
    }

    terms
}

fn fallback_query(words: &[&str]) -> String {
    let content_words: Vec<&str> = words
        .iter()
        .take(FALLBACK_WINDOW_WORDS)
        .filter(|w| w.chars().count() > 3 && !STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .take(MAX_FALLBACK_WORDS)
        .copied()
        .collect();

    // Claims made only of short or stop words still need a non-empty query
    if content_words.is_empty() {
        return words
            .iter()
            .take(MAX_FALLBACK_WORDS)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
    }

    content_words.join(" ")
}
