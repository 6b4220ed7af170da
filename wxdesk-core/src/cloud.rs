use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{Config, Error, Result, export::write_raw};

pub const CLOUD_RESPONSE: &str = "Cloud data";

/// Placeholder cloud backend plus a single flat local data file.
#[derive(Debug, Clone)]
pub struct CloudStorage {
    credentials: String,
    local_path: PathBuf,
}

impl CloudStorage {
    pub fn new(credentials: String, local_path: impl Into<PathBuf>) -> Self {
        Self { credentials, local_path: local_path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cloud_credentials.clone(), config.local_data_file.clone())
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn retrieve_from_cloud(&self, filters: &str) -> &'static str {
        debug!(filters, has_credentials = !self.credentials.is_empty(), "stub cloud retrieve");
        CLOUD_RESPONSE
    }

    /// Overwrite the local data file with `data`.
    pub fn save_locally(&self, data: &str) -> Result<()> {
        write_raw(&self.local_path, data).map_err(|source| self.storage_error(source))?;
        info!(path = %self.local_path.display(), bytes = data.len(), "saved local data");
        Ok(())
    }

    /// Whole content of the local data file. `filters` is accepted but unused.
    ///
    /// A file that was never written reads as empty.
    pub fn retrieve_locally(&self, filters: &str) -> Result<String> {
        debug!(filters, path = %self.local_path.display(), "reading local data");
        match fs::read_to_string(&self.local_path) {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(self.storage_error(err)),
        }
    }

    fn storage_error(&self, source: io::Error) -> Error {
        Error::LocalStorage { path: self.local_path.clone(), source }
    }
}
