use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by store, provider and exporter operations.
///
/// Everything except [`Error::Console`] is recoverable: the command loop
/// reports it and goes back to the menu.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid choice '{0}', please try again.")]
    InvalidChoice(String),

    #[error("Invalid number for {field}: '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("Unknown export format '{0}'. Supported formats: csv, json.")]
    UnknownFormat(String),

    #[error("Failed to export to {}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to access local data file {}", path.display())]
    LocalStorage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Console I/O failed")]
    Console(#[from] io::Error),
}

impl Error {
    /// Parse a floating point field, mapping failures to [`Error::InvalidNumber`].
    pub fn parse_number(field: &'static str, input: &str) -> Result<f64> {
        input.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
            field,
            input: input.to_string(),
        })
    }

    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Console(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_surrounding_whitespace() {
        let value = Error::parse_number("latitude", " 48.8\n").expect("valid number");
        assert_eq!(value, 48.8);
    }

    #[test]
    fn parse_number_reports_field_and_input() {
        let err = Error::parse_number("longitude", "east").unwrap_err();

        assert!(matches!(err, Error::InvalidNumber { field: "longitude", .. }));
        assert!(err.to_string().contains("'east'"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn console_errors_are_fatal() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(!err.is_recoverable());
    }
}
