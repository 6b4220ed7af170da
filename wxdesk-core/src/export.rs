use std::{
    fs::File,
    io::Write,
    path::Path,
};

use tracing::info;

use crate::{Error, Result};

/// Label attached to an export. It never changes the bytes written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for ExportFormat {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(Error::UnknownFormat(value.to_string())),
        }
    }
}

/// Write `data` verbatim to `path`, truncating any existing file.
///
/// Returns the number of bytes written.
pub fn export(data: &str, path: impl AsRef<Path>, format: ExportFormat) -> Result<usize> {
    let path = path.as_ref();
    write_raw(path, data).map_err(|source| Error::Export { path: path.to_path_buf(), source })?;

    info!(path = %path.display(), %format, bytes = data.len(), "exported data");
    Ok(data.len())
}

pub(crate) fn write_raw(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()
}
