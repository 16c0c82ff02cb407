// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The pipeline takes a single optional positional argument:
// where to read the texts from. Everything else comes from
// EstimationConfig::default().

use clap::Args;

use crate::application::estimate_use_case::{EstimationConfig, DEFAULT_SOURCE};

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Directory or glob pattern of the plain-text files to train on
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: String,
}

/// Convert CLI arguments into the application-layer config.
/// The application layer never sees clap types.
impl From<EstimateArgs> for EstimationConfig {
    fn from(a: EstimateArgs) -> Self {
        EstimationConfig {
            source: a.source,
            ..EstimationConfig::default()
        }
    }
}
