// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// The three ways a run can fail:
//
//   Io          — source unreadable, output unwritable
//   Config      — bad K / I, missing stop-word list,
//                 nothing left to train on
//   Processing  — a single document could not be segmented
//
// Every variant carries the stage it came from so the message
// printed by `main` names where the run stopped.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reader,
    Segmenter,
    StopWordFilter,
    Trainer,
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Reader         => "reader",
            Stage::Segmenter      => "segmenter",
            Stage::StopWordFilter => "stop-word filter",
            Stage::Trainer        => "trainer",
            Stage::Output         => "output",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("[{stage}] I/O error on '{}': {source}", .path.display())]
    Io {
        stage:  Stage,
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[{stage}] configuration error: {message}")]
    Config {
        stage:   Stage,
        message: String,
    },

    #[error("[{stage}] failed to process '{document}': {message}")]
    Processing {
        stage:    Stage,
        document: String,
        message:  String,
    },
}

impl PipelineError {
    pub fn io(stage: Stage, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { stage, path: path.into(), source }
    }

    pub fn config(stage: Stage, message: impl Into<String>) -> Self {
        Self::Config { stage, message: message.into() }
    }

    pub fn processing(
        stage:    Stage,
        document: impl Into<String>,
        message:  impl Into<String>,
    ) -> Self {
        Self::Processing {
            stage,
            document: document.into(),
            message:  message.into(),
        }
    }

    /// The stage that raised this error
    pub fn stage(&self) -> Stage {
        match self {
            Self::Io { stage, .. }
            | Self::Config { stage, .. }
            | Self::Processing { stage, .. } => *stage,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing { .. })
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_stage_and_document() {
        let err = PipelineError::processing(Stage::Segmenter, "texts/a.txt", "bad bytes");
        let msg = err.to_string();
        assert!(msg.contains("segmenter"));
        assert!(msg.contains("texts/a.txt"));
        assert!(err.is_processing());
        assert_eq!(err.stage(), Stage::Segmenter);
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;
        let io  = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = PipelineError::io(Stage::Reader, "missing/*", io);
        assert!(err.is_io());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing/*"));
    }
}
