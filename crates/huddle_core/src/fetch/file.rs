//! Local JSON file profile source.
//!
//! Reads an insights envelope previously written by the generator, e.g.
//! `output.json`, using the same decoder as the HTTP source.

use super::{decode_envelope, FetchError, FetchResult, ProfileSource};
use crate::model::profile::ProfileBatch;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProfileSource {
    path: PathBuf,
}

impl FileProfileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileSource for FileProfileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_batch(&self) -> FetchResult<ProfileBatch> {
        let body = std::fs::read(&self.path)
            .map_err(|err| FetchError::Io(format!("`{}`: {err}", self.path.display())))?;
        let batch = decode_envelope(&body)?;
        info!(
            "event=fetch_done module=fetch source=file status=ok accepted={} rejected={} flagged={}",
            batch.profiles.len(),
            batch.rejected.len(),
            batch.flagged.len()
        );
        Ok(batch)
    }
}
