// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores the TopicModel as pretty-printed JSON.
//
// Saving never leaves a half-written file at the target path:
//   1. create the target's parent directory if needed
//   2. write into a NamedTempFile in that same directory
//   3. flush + fsync
//   4. persist() renames it over the target
//
// If any step fails the temp file is dropped (and deleted) and
// whatever was at the target before is left untouched.
//
// Floats are written with serde_json's float_roundtrip feature
// so loading gives back the exact same f64 values.
//
// Reference: tempfile crate documentation (NamedTempFile::persist)

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::domain::error::{PipelineError, Result, Stage};
use crate::domain::traits::Persistable;
use crate::ml::model::TopicModel;

impl Persistable for TopicModel {
    fn save(&self, path: &Path) -> Result<()> {
        let io_err = |e: io::Error| PipelineError::io(Stage::Output, path, e);

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(io_err)?;

        let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, self).map_err(|e| io_err(e.into()))?;
            writer.write_all(b"\n").map_err(io_err)?;
            writer.flush().map_err(io_err)?;
        }
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;

        tracing::debug!("Saved topic model to '{}'", path.display());
        Ok(())
    }

    fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| PipelineError::io(Stage::Output, path, e))?;

        serde_json::from_str(&json).map_err(|e| {
            PipelineError::io(
                Stage::Output,
                path,
                io::Error::new(io::ErrorKind::InvalidData, e),
            )
        })
    }
}
