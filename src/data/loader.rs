// ============================================================
// Layer 4 — Text Reader
// ============================================================
// Loads plain-text files into Documents.
//
// The source location is either:
//   - a directory      → every regular file directly inside it
//   - a glob pattern   → every regular file it matches,
//                        e.g. "resources/texts/*"
//
// Hidden files (name starting with '.') are skipped in both
// forms. Files are returned sorted by path so repeated runs see
// the corpus in the same order.
//
// Files that are not valid UTF-8 are decoded lossily and the
// offset of the first bad byte is kept on the Document; the
// segmenter refuses such documents.
//
// Reference: glob crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::domain::document::Document;
use crate::domain::error::{PipelineError, Result, Stage};
use crate::domain::traits::DocumentSource;

/// Reads every file matched by a directory path or glob pattern.
/// Implements the DocumentSource trait from Layer 3.
pub struct TextReader {
    /// Directory path or glob pattern
    location: String,

    /// Language code attached to every document
    language: String,
}

impl TextReader {
    pub fn new(location: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            language: language.into(),
        }
    }

    /// Resolve the location into a sorted list of file paths
    fn matched_files(&self) -> Result<Vec<PathBuf>> {
        let dir = Path::new(&self.location);

        let mut files: Vec<PathBuf> = if dir.is_dir() {
            let entries = fs::read_dir(dir)
                .map_err(|e| PipelineError::io(Stage::Reader, dir, e))?;
            let mut paths = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|e| PipelineError::io(Stage::Reader, dir, e))?;
                if !is_hidden(&entry.path()) {
                    paths.push(entry.path());
                }
            }
            paths
        } else {
            let options = glob::MatchOptions {
                require_literal_leading_dot: true,
                ..glob::MatchOptions::new()
            };
            let pattern = glob::glob_with(&self.location, options).map_err(|e| {
                PipelineError::io(
                    Stage::Reader,
                    &self.location,
                    io::Error::new(io::ErrorKind::InvalidInput, e.to_string()),
                )
            })?;
            let mut paths = Vec::new();
            for entry in pattern {
                let path = entry.map_err(|e| {
                    let source = io::Error::new(e.error().kind(), e.error().to_string());
                    PipelineError::io(Stage::Reader, e.path(), source)
                })?;
                paths.push(path);
            }
            paths
        };

        // Only regular files; sub-directories are not descended into
        files.retain(|p| p.is_file());
        files.sort();

        if files.is_empty() {
            return Err(PipelineError::io(
                Stage::Reader,
                &self.location,
                io::Error::new(io::ErrorKind::NotFound, "source location matches no files"),
            ));
        }

        Ok(files)
    }
}

impl DocumentSource for TextReader {
    fn load_all(&self) -> Result<Vec<Document>> {
        let files = self.matched_files()?;
        let mut docs = Vec::with_capacity(files.len());

        for path in &files {
            let doc = load_single_text(path, &self.language)?;
            tracing::debug!("Loaded: {} ({} bytes)", doc.id, doc.text.len());
            if doc.text.trim().is_empty() {
                tracing::warn!("'{}' contains no text", doc.id);
            }
            docs.push(doc);
        }

        tracing::info!("Read {} documents from '{}'", docs.len(), self.location);
        Ok(docs)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Read one file and wrap it in a Document.
fn load_single_text(path: &Path, language: &str) -> Result<Document> {
    let bytes = fs::read(path).map_err(|e| PipelineError::io(Stage::Reader, path, e))?;
    let id    = path.display().to_string();

    let doc = match String::from_utf8(bytes) {
        Ok(text) => Document::new(id, text, language),
        Err(e) => {
            let offset = e.utf8_error().valid_up_to();
            let text   = String::from_utf8_lossy(e.as_bytes()).into_owned();
            tracing::warn!("'{}' is not valid UTF-8 (first bad byte at {})", id, offset);
            let mut doc = Document::new(id, text, language);
            doc.undecodable_at = Some(offset);
            doc
        }
    };

    Ok(doc)
}
