use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use wxdesk_core::{CloudStorage, Config, ExportFormat, WeatherSource, export};

use crate::menu::{Console, Session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxdesk", version, about = "Console notebook for weather locations and variables")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive numbered menu (the default).
    Menu,

    /// Configure API and storage settings interactively.
    Configure,

    /// Write DATA verbatim to FILENAME.
    Export {
        data: String,
        filename: PathBuf,

        /// Label for the export: csv or json. The bytes are the same.
        #[arg(long, default_value = "csv", value_parser = parse_format)]
        format: ExportFormat,
    },

    /// Overwrite the local data file with DATA.
    Save {
        data: String,
    },

    /// Print the contents of the local data file.
    Load {
        #[arg(long, default_value = "")]
        filters: String,
    },

    /// Query the cloud store.
    Cloud {
        #[arg(long, default_value = "")]
        filters: String,
    },

    /// Print where the config file lives.
    ConfigPath,
}

fn parse_format(value: &str) -> Result<ExportFormat, wxdesk_core::Error> {
    ExportFormat::try_from(value)
}

impl Cli {
    pub fn run<R: BufRead, W: Write, E: Write>(
        self,
        input: R,
        mut out: W,
        mut err: E,
    ) -> anyhow::Result<()> {
        let Cli { config, command } = self;
        let config_path = || match &config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path(),
        };

        match command.unwrap_or(Command::Menu) {
            Command::Menu => {
                // A broken config file must not keep the menu from starting.
                let config = config_path()
                    .and_then(|path| Config::load_from(&path))
                    .unwrap_or_else(|e| {
                        let _ = writeln!(err, "Error: {e}");
                        Config::default()
                    });
                let mut session = Session::new(WeatherSource::from_config(&config));
                Console::new(input, out, err)
                    .run(&mut session)
                    .context("Console session failed")?;
            }
            Command::Configure => {
                let path = config_path()?;
                configure(Config::load_from(&path)?, &path, out)?;
            }
            Command::Export { data, filename, format } => {
                let bytes = export(&data, &filename, format)?;
                writeln!(out, "Exported {bytes} bytes to {} as {format}.", filename.display())?;
            }
            Command::Save { data } => {
                let storage = CloudStorage::from_config(&Config::load_from(&config_path()?)?);
                storage.save_locally(&data)?;
                writeln!(out, "Saved {} bytes to {}.", data.len(), storage.local_path().display())?;
            }
            Command::Load { filters } => {
                let config = Config::load_from(&config_path()?)?;
                let data = CloudStorage::from_config(&config).retrieve_locally(&filters)?;
                out.write_all(data.as_bytes())?;
                out.flush()?;
            }
            Command::Cloud { filters } => {
                let config = Config::load_from(&config_path()?)?;
                if !config.has_cloud_credentials() {
                    writeln!(err, "Warning: no cloud credentials configured.")?;
                }
                let storage = CloudStorage::from_config(&config);
                writeln!(out, "{}", storage.retrieve_from_cloud(&filters))?;
            }
            Command::ConfigPath => writeln!(out, "{}", config_path()?.display())?,
        }

        Ok(())
    }
}

fn configure<W: Write>(mut config: Config, path: &Path, mut out: W) -> anyhow::Result<()> {
    config.api_key = Text::new("API key:")
        .with_default(&config.api_key)
        .prompt()
        .context("Failed to read API key")?;

    config.base_url = Text::new("Base URL:")
        .with_default(&config.base_url)
        .prompt()
        .context("Failed to read base URL")?;

    let credentials = Password::new("Cloud credentials (leave empty to keep current):")
        .without_confirmation()
        .prompt()
        .context("Failed to read cloud credentials")?;
    if !credentials.is_empty() {
        config.cloud_credentials = credentials;
    }

    let local = config.local_data_file.display().to_string();
    let local = Text::new("Local data file:")
        .with_default(&local)
        .prompt()
        .context("Failed to read local data file")?;
    config.local_data_file = PathBuf::from(local);

    config.save_to(path)?;
    writeln!(out, "Configuration saved to {}", path.display())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::{fs, io::Cursor};

    #[derive(Debug)]
    struct Output {
        out: String,
        err: String,
    }

    fn run_cli(args: &[&str], stdin: &str) -> anyhow::Result<Output> {
        let cli = Cli::try_parse_from(std::iter::once("wxdesk").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        let mut err = Vec::new();
        cli.run(Cursor::new(stdin.as_bytes()), &mut out, &mut err)?;

        Ok(Output { out: String::from_utf8(out)?, err: String::from_utf8(err)? })
    }

    /// Config file in a temp dir pointing the local data file next to it.
    fn config_in(dir: &Path, credentials: &str) -> String {
        let config_path = dir.join("config.toml");
        Config {
            cloud_credentials: credentials.into(),
            local_data_file: dir.join("local_data.txt"),
            ..Config::default()
        }
        .save_to(&config_path)
        .unwrap();
        config_path.to_str().unwrap().to_string()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["wxdesk"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn save_takes_data_and_global_config() {
        let cli = Cli::try_parse_from(["wxdesk", "save", "hello world", "--config", "c.toml"])
            .unwrap();

        assert!(matches!(cli.command, Some(Command::Save { ref data }) if data == "hello world"));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn save_then_load_through_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "");

        run_cli(&["--config", &config, "save", "Name: Paris"], "").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("local_data.txt")).unwrap(), "Name: Paris");

        let loaded = run_cli(&["--config", &config, "load", "--filters", "x"], "").unwrap();
        assert_eq!(loaded.out, "Name: Paris");
        assert_eq!(loaded.err, "");
    }

    #[test]
    fn load_before_any_save_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "");

        let loaded = run_cli(&["--config", &config, "load"], "").unwrap();
        assert_eq!(loaded.out, "");
    }

    #[test]
    fn cloud_prints_placeholder_and_warns_without_credentials() {
        let dir = tempfile::tempdir().unwrap();

        let bare = run_cli(&["--config", &config_in(dir.path(), ""), "cloud"], "").unwrap();
        assert_eq!(bare.out, "Cloud data\n");
        assert_eq!(bare.err, "Warning: no cloud credentials configured.\n");

        let with_creds =
            run_cli(&["--config", &config_in(dir.path(), "user:pw"), "cloud", "--filters", "eu"], "")
                .unwrap();
        assert_eq!(with_creds.out, "Cloud data\n");
        assert_eq!(with_creds.err, "");
    }

    #[test]
    fn menu_starts_with_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "api_key = [").unwrap();

        let run = run_cli(&["--config", bad.to_str().unwrap()], "7\nParis\n11\n").unwrap();

        assert!(run.out.starts_with("Menu:\n"));
        assert!(run.out.contains("Forecast data\n"));
        assert_eq!(run.err.lines().count(), 1);
        assert!(run.err.starts_with("Error: Failed to parse config file"));
    }

    #[test]
    fn other_commands_still_fail_on_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "api_key = [").unwrap();

        let err = run_cli(&["--config", bad.to_str().unwrap(), "load"], "").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn export_subcommand_writes_raw_bytes_for_either_format() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("out.csv");
        let json = dir.path().join("out.json");
        let data = "Variable: temperature, Value: 21.5";

        let first = run_cli(&["export", data, csv.to_str().unwrap()], "").unwrap();
        run_cli(&["export", data, json.to_str().unwrap(), "--format", "JSON"], "").unwrap();

        assert!(first.out.ends_with("as CSV.\n"));
        assert_eq!(fs::read_to_string(&csv).unwrap(), data);
        assert_eq!(fs::read(&csv).unwrap(), fs::read(&json).unwrap());
    }

    #[test]
    fn export_rejects_unknown_format() {
        let err = Cli::try_parse_from(["wxdesk", "export", "d", "f.xml", "--format", "xml"])
            .unwrap_err();
        assert!(err.to_string().contains("Unknown export format 'xml'"));
    }
}
