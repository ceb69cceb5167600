//! Check command - evaluates claims once and prints the verdicts

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::api::types::FactCheckResponse;
use crate::config::AppConfig;
use crate::domain::claim::{Claim, DEFAULT_LANGUAGE};
use crate::infrastructure::fact_check::FactCheckOrchestrator;
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Language code of the claims
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Serve evidence from a fixture file instead of the network providers
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Claims to evaluate; read one per line from stdin when omitted
    pub claims: Vec<String>,
}

/// Run the check command
pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    if let Some(fixture) = &args.fixture {
        config.providers.fixture_path = Some(fixture.clone());
    }

    let claims = if args.claims.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("No claims given; pass them as arguments or pipe them on stdin");
        }
        read_claims(stdin.lock())?
    } else {
        args.claims.clone()
    };

    let orchestrator = crate::build_orchestrator(&config)?;
    let response = check(&orchestrator, claims, &args.language).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Evaluate claim texts in one language
async fn check(
    orchestrator: &FactCheckOrchestrator,
    texts: Vec<String>,
    language: &str,
) -> anyhow::Result<FactCheckResponse> {
    let claims: Vec<Claim> = texts
        .into_iter()
        .map(|text| Claim::new(text).with_language(language))
        .collect();

    info!(claims = claims.len(), language = %language, "Checking claims");

    let results = orchestrator.check_claims(claims).await?;
    Ok(FactCheckResponse::from_results(results))
}

/// Non-blank lines, trimmed
fn read_claims(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut claims = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            claims.push(line.to_string());
        }
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::domain::credibility::CredibilityTable;
    use crate::domain::verdict::{DegradeReason, Verdict, VerdictConfig};
    use crate::infrastructure::evidence::{EvidenceFixture, EvidenceGatherer};
    use crate::infrastructure::fact_check::EngineConfig;

    fn orchestrator(fixture: &str) -> FactCheckOrchestrator {
        let providers = EvidenceFixture::from_json(fixture).unwrap().into_providers();

        FactCheckOrchestrator::new(
            EvidenceGatherer::new(providers, Duration::from_secs(1)),
            Arc::new(CredibilityTable::seeded()),
            VerdictConfig::default(),
            EngineConfig::default(),
        )
    }

    #[test]
    fn test_read_claims_skips_blank_lines() {
        let input = "First claim\n\n   \n  Second claim  \n";

        let claims = read_claims(input.as_bytes()).unwrap();

        assert_eq!(claims, vec!["First claim", "Second claim"]);
    }

    #[tokio::test]
    async fn test_check_with_fact_check_rating() {
        let orchestrator = orchestrator(
            r#"{
                "fact_check": {
                    "items": [{
                        "url": "https://www.snopes.com/fact-check/moon",
                        "title": "Fact Check: moon landing",
                        "snippet": "Rating: False",
                        "rating": "False",
                        "source_name": "Snopes"
                    }]
                }
            }"#,
        );

        let response = check(
            &orchestrator,
            vec!["The moon landing was staged".to_string()],
            "en",
        )
        .await
        .unwrap();

        assert!(response.success);
        let result = &response.results[0];
        assert_eq!(result.verdict, Verdict::LikelyFalse);
        assert_eq!(result.sources[0].source_name, "Snopes");
        assert!(result.explanation.starts_with("Professional fact-checkers"));
    }

    #[tokio::test]
    async fn test_check_with_failing_providers_degrades() {
        let orchestrator = orchestrator(r#"{"search": {"fail": true}, "fact_check": {"fail": true}}"#);

        let response = check(&orchestrator, vec!["Claim".to_string()], "fr")
            .await
            .unwrap();

        let result = &response.results[0];
        assert_eq!(result.verdict, Verdict::LikelyFalse);
        assert_eq!(
            result.heuristic_analysis.as_ref().map(|h| h.reason),
            Some(DegradeReason::ProvidersUnavailable)
        );
    }

    #[tokio::test]
    async fn test_check_rejects_blank_claim() {
        let orchestrator = orchestrator("{}");

        let err = check(&orchestrator, vec!["  ".to_string()], "en")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("empty text"));
    }
}
