//! Templated verdict explanations

use super::{DegradeReason, Verdict, VerdictConfig};
use crate::domain::evidence::StanceTally;

/// Confidence below which the closing sentence calls the evidence inconclusive
const INCONCLUSIVE_CONFIDENCE: f64 = 60.0;

/// Signals an explanation is selected from
#[derive(Debug, Clone, Copy)]
pub struct ExplanationInputs {
    pub verdict: Verdict,
    pub confidence: f64,
    pub total_sources_found: usize,
    pub average_credibility: Option<f64>,
    pub red_flags: u32,
    pub stance: StanceTally,
    pub degraded: Option<DegradeReason>,
}

/// Build the human-readable explanation from a fixed set of sentences
pub fn build_explanation(config: &VerdictConfig, inputs: &ExplanationInputs) -> String {
    let mut sentences: Vec<String> = Vec::with_capacity(4);

    if let Some(sentence) = fact_check_sentence(&inputs.stance) {
        sentences.push(sentence.to_string());
    }

    match inputs.degraded {
        Some(reason) => sentences.push(format!(
            "Evidence sources were unavailable ({}), so this assessment relies on text heuristics only.",
            reason
        )),
        None => sentences.push(source_sentence(config, inputs)),
    }

    if inputs.red_flags > 0 {
        sentences.push(format!(
            "The claim contains {} red {} commonly associated with misinformation.",
            inputs.red_flags,
            plural(inputs.red_flags as usize, "flag", "flags")
        ));
    }

    sentences.push(closing_sentence(inputs));
    sentences.join(" ")
}

fn fact_check_sentence(stance: &StanceTally) -> Option<&'static str> {
    if stance.rated() == 0 {
        return None;
    }

    let sentence = if stance.refutes > stance.supports {
        "Professional fact-checkers have rated this claim as false or misleading."
    } else if stance.supports > stance.refutes {
        "Professional fact-checkers have verified this claim as true."
    } else {
        "Professional fact-checkers have given this claim mixed ratings."
    };

    Some(sentence)
}

fn source_sentence(config: &VerdictConfig, inputs: &ExplanationInputs) -> String {
    let total = inputs.total_sources_found;

    let average = match inputs.average_credibility {
        Some(average) if total > 0 => average,
        _ => return "No corroborating sources were found; treat with caution.".to_string(),
    };

    if average >= config.high_credibility {
        format!(
            "Found {} highly credible {} supporting this assessment.",
            total,
            plural(total, "source", "sources")
        )
    } else if average >= config.moderate_credibility {
        format!(
            "Found {} moderately credible {}.",
            total,
            plural(total, "source", "sources")
        )
    } else {
        format!(
            "Limited credible sources found ({} {} analyzed).",
            total,
            plural(total, "source", "sources")
        )
    }
}

fn closing_sentence(inputs: &ExplanationInputs) -> String {
    if inputs.confidence < INCONCLUSIVE_CONFIDENCE {
        let lean = match inputs.verdict {
            Verdict::LikelyTrue => "true",
            Verdict::LikelyFalse => "false",
        };
        return format!(
            "The evidence is inconclusive; the claim is judged likely {} with low confidence.",
            lean
        );
    }

    match inputs.verdict {
        Verdict::LikelyTrue => "Overall, the claim appears to be accurate.".to_string(),
        Verdict::LikelyFalse => "Overall, the claim appears to be misleading or false.".to_string(),
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
