//! Core library for the `wxdesk` console.
//!
//! This crate defines:
//! - The in-memory record store for locations and weather variables
//! - Stub weather and cloud sources that answer with placeholder text
//! - Plain-text export and configuration handling
//!
//! It is used by `wxdesk-cli`, but can also be reused by other binaries.

pub mod cloud;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod provider;
pub mod store;

pub use cloud::CloudStorage;
pub use config::Config;
pub use error::{Error, Result};
pub use export::{ExportFormat, export};
pub use model::{Location, WeatherVariable};
pub use provider::{FetchRequest, ProviderKind, WeatherSource};
pub use store::RecordStore;
