//! CLI module for Misinfo Guard
//!
//! - `serve`: run the HTTP service
//! - `check`: evaluate claims once and print the verdicts as JSON

pub mod check;
pub mod serve;

use clap::{Parser, Subcommand};

/// Misinfo Guard - credibility-weighted fact-check verdicts
#[derive(Parser)]
#[command(name = "misinfo-guard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve,

    /// Evaluate claims and print the result document
    Check(check::CheckArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_args() {
        let cli = Cli::try_parse_from([
            "misinfo-guard",
            "check",
            "--language",
            "es",
            "--fixture",
            "evidence.json",
            "first claim",
            "second claim",
        ])
        .unwrap();

        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.language, "es");
                assert_eq!(args.fixture.unwrap().to_str(), Some("evidence.json"));
                assert_eq!(args.claims, vec!["first claim", "second claim"]);
            }
            Command::Serve => panic!("expected check"),
        }
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["misinfo-guard", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }
}
