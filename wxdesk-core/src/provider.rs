use std::io::Write;

use tracing::debug;

use crate::{Config, Location};

pub const FORECAST_RESPONSE: &str = "Forecast data";
pub const HISTORICAL_RESPONSE: &str = "Historical data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Forecast,
    Historical,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Forecast => "forecast",
            ProviderKind::Historical => "historical",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller wants from the weather source.
///
/// Dates are opaque strings and are never parsed.
#[derive(Debug, Clone, Copy)]
pub enum FetchRequest<'a> {
    Forecast {
        location: &'a Location,
    },
    Historical {
        location: &'a Location,
        start_date: &'a str,
        end_date: &'a str,
    },
}

impl FetchRequest<'_> {
    pub fn kind(&self) -> ProviderKind {
        match self {
            FetchRequest::Forecast { .. } => ProviderKind::Forecast,
            FetchRequest::Historical { .. } => ProviderKind::Historical,
        }
    }

    pub fn location(&self) -> &Location {
        match *self {
            FetchRequest::Forecast { location } | FetchRequest::Historical { location, .. } => {
                location
            }
        }
    }
}

/// Stand-in for a remote weather API. Every fetch answers with constant text.
#[derive(Debug, Clone)]
pub struct WeatherSource {
    api_key: String,
    base_url: String,
}

impl WeatherSource {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    pub fn fetch(&self, request: FetchRequest<'_>) -> &'static str {
        debug!(
            kind = %request.kind(),
            location = %request.location().name,
            base_url = %self.base_url,
            has_key = !self.api_key.is_empty(),
            "stub fetch"
        );

        match request {
            FetchRequest::Forecast { .. } => FORECAST_RESPONSE,
            FetchRequest::Historical { .. } => HISTORICAL_RESPONSE,
        }
    }

    pub fn fetch_forecast(&self, location: &Location) -> &'static str {
        self.fetch(FetchRequest::Forecast { location })
    }

    pub fn fetch_historical_data(
        &self,
        location: &Location,
        start_date: &str,
        end_date: &str,
    ) -> &'static str {
        self.fetch(FetchRequest::Historical { location, start_date, end_date })
    }

    /// Surface a response to the user as-is.
    pub fn handle_response<W: Write>(&self, out: &mut W, response: &str) -> crate::Result<()> {
        writeln!(out, "{response}")?;
        Ok(())
    }
}

impl Default for WeatherSource {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
