// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands the resulting
// configuration to the estimation use case. Errors are wrapped
// with anyhow context and bubble up to main, which prints them
// to stderr and exits non-zero.

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::EstimateArgs;

use crate::application::estimate_use_case::{EstimateUseCase, EstimationConfig};

#[derive(Parser, Debug)]
#[command(
    name = "lda-pipeline",
    version,
    about = "Read plain-text files, segment them, remove stop words and estimate an LDA topic model."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: EstimateArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config: EstimationConfig = self.args.into();
        let target = config.target.clone();

        tracing::info!("Starting estimation on '{}'", config.source);

        let model = EstimateUseCase::new(config)
            .execute()
            .context("LDA estimation failed")?;

        println!(
            "Trained {} topics over {} instances ({} words). Model saved to {}",
            model.n_topics(),
            model.doc_topic.len(),
            model.vocabulary.len(),
            target.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::estimate_use_case::DEFAULT_SOURCE;

    #[test]
    fn test_source_defaults_to_bundled_texts() {
        let cli = Cli::try_parse_from(["lda-pipeline"]).unwrap();
        assert_eq!(cli.args.source, DEFAULT_SOURCE);
    }

    #[test]
    fn test_positional_source() {
        let cli    = Cli::try_parse_from(["lda-pipeline", "corpus/*.txt"]).unwrap();
        let config = EstimationConfig::from(cli.args);
        assert_eq!(config.source, "corpus/*.txt");
        assert_eq!(config.lda.n_topics, 10);
        assert_eq!(config.lda.n_iterations, 100);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_flags_are_rejected() {
        assert!(Cli::try_parse_from(["lda-pipeline", "--topics", "5"]).is_err());
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
