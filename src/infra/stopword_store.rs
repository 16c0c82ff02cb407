// ============================================================
// Layer 6 — Stop-word Store
// ============================================================
// Loads the stop-word list for a language from the resource
// directory:
//
//   resources/
//     stopwords_en.txt   ← one lowercase word per line
//
// Blank lines and lines starting with '#' are ignored.
// A missing or unreadable list is a configuration error.

use std::fs;
use std::path::PathBuf;

use crate::data::stopword_filter::StopWordSet;
use crate::domain::error::{PipelineError, Result, Stage};

pub struct StopWordStore {
    dir: PathBuf,
}

impl StopWordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the list for `language`
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("stopwords_{language}.txt"))
    }

    pub fn load(&self, language: &str) -> Result<StopWordSet> {
        let path = self.path_for(language);

        let content = fs::read_to_string(&path).map_err(|e| {
            PipelineError::config(
                Stage::StopWordFilter,
                format!("cannot load stop-word list '{}': {e}", path.display()),
            )
        })?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        let set = StopWordSet::new(language, words);

        tracing::info!("Loaded {} stop words from '{}'", set.len(), path.display());
        Ok(set)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_list() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("stopwords_en.txt"),
            "# English\nthe\n\n  And \na\n",
        )
        .unwrap();

        let set = StopWordStore::new(dir.path()).load("en").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("and"));
        assert!(!set.contains("# english"));
        assert_eq!(set.language(), "en");
    }

    #[test]
    fn test_missing_list_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StopWordStore::new(dir.path()).load("xx").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("stopwords_xx.txt"));
    }

    #[test]
    fn test_non_utf8_list_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stopwords_en.txt"), b"the\n\xff\n").unwrap();
        assert!(StopWordStore::new(dir.path()).load("en").unwrap_err().is_config());
    }

    #[test]
    fn test_bundled_english_list() {
        let set = StopWordStore::new("resources").load("en").unwrap();
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(!set.contains("cat"));
    }
}
