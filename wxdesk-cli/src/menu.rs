use std::io::{BufRead, Write};

use tracing::debug;
use wxdesk_core::{
    Error, ExportFormat, Location, RecordStore, Result, WeatherSource, WeatherVariable, export,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddLocation,
    RemoveLocation,
    ListLocations,
    AddVariable,
    RemoveVariable,
    ListVariables,
    FetchForecast,
    FetchHistorical,
    ExportCsv,
    ExportJson,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::AddLocation,
        MenuChoice::RemoveLocation,
        MenuChoice::ListLocations,
        MenuChoice::AddVariable,
        MenuChoice::RemoveVariable,
        MenuChoice::ListVariables,
        MenuChoice::FetchForecast,
        MenuChoice::FetchHistorical,
        MenuChoice::ExportCsv,
        MenuChoice::ExportJson,
        MenuChoice::Exit,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            MenuChoice::AddLocation => "1",
            MenuChoice::RemoveLocation => "2",
            MenuChoice::ListLocations => "3",
            MenuChoice::AddVariable => "4",
            MenuChoice::RemoveVariable => "5",
            MenuChoice::ListVariables => "6",
            MenuChoice::FetchForecast => "7",
            MenuChoice::FetchHistorical => "8",
            MenuChoice::ExportCsv => "9",
            MenuChoice::ExportJson => "10",
            MenuChoice::Exit => "11",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddLocation => "Add Location",
            MenuChoice::RemoveLocation => "Remove Location",
            MenuChoice::ListLocations => "List Locations",
            MenuChoice::AddVariable => "Add Weather Variable",
            MenuChoice::RemoveVariable => "Remove Weather Variable",
            MenuChoice::ListVariables => "List Weather Variables",
            MenuChoice::FetchForecast => "Fetch Weather Forecast",
            MenuChoice::FetchHistorical => "Fetch Historical Weather Data",
            MenuChoice::ExportCsv => "Export Data to CSV",
            MenuChoice::ExportJson => "Export Data to JSON",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<&str> for MenuChoice {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let token = value.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|c| c.token() == token)
            .ok_or_else(|| Error::InvalidChoice(token.to_string()))
    }
}

/// State owned by the command loop for one run.
#[derive(Debug, Default)]
pub struct Session {
    pub store: RecordStore,
    pub source: WeatherSource,
}

impl Session {
    pub fn new(source: WeatherSource) -> Self {
        Self { store: RecordStore::new(), source }
    }
}

/// Line-oriented console: prompts and results on `out`, diagnostics on `err`.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Run the menu until "exit" or end of input.
    pub fn run(&mut self, session: &mut Session) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let outcome = MenuChoice::try_from(line.as_str()).and_then(|choice| {
                if choice == MenuChoice::Exit {
                    Ok(false)
                } else {
                    self.dispatch(choice, session).map(|()| true)
                }
            });

            match outcome {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, session: &mut Session) -> Result<()> {
        let Session { store, source } = session;

        match choice {
            MenuChoice::AddLocation => {
                let name = self.ask("Enter location name: ")?;
                let latitude = self.ask_number("Enter latitude: ", "latitude")?;
                let longitude = self.ask_number("Enter longitude: ", "longitude")?;
                store.add_location(Location::new(name, latitude, longitude));
            }
            MenuChoice::RemoveLocation => {
                let name = self.ask("Enter location name to remove: ")?;
                store.remove_location(&name);
            }
            MenuChoice::ListLocations => {
                for location in store.locations() {
                    writeln!(self.out, "{location}")?;
                }
            }
            MenuChoice::AddVariable => {
                let name = self.ask("Enter weather variable name: ")?;
                let value = self.ask_number("Enter value: ", "value")?;
                store.add_variable(WeatherVariable::new(name, value));
            }
            MenuChoice::RemoveVariable => {
                let name = self.ask("Enter weather variable name to remove: ")?;
                store.remove_variable(&name);
            }
            MenuChoice::ListVariables => {
                for variable in store.variables() {
                    writeln!(self.out, "{variable}")?;
                }
            }
            MenuChoice::FetchForecast => {
                let name = self.ask("Enter location name for forecast: ")?;
                let location = Location::new(name, 0.0, 0.0);
                let forecast = source.fetch_forecast(&location);
                source.handle_response(&mut self.out, forecast)?;
            }
            MenuChoice::FetchHistorical => {
                let name = self.ask("Enter location name for historical data: ")?;
                let start_date = self.ask("Enter start date (YYYY-MM-DD): ")?;
                let end_date = self.ask("Enter end date (YYYY-MM-DD): ")?;
                let location = Location::new(name, 0.0, 0.0);
                let data = source.fetch_historical_data(&location, &start_date, &end_date);
                source.handle_response(&mut self.out, data)?;
            }
            MenuChoice::ExportCsv => self.export_data(ExportFormat::Csv)?,
            MenuChoice::ExportJson => self.export_data(ExportFormat::Json)?,
            MenuChoice::Exit => {}
        }

        Ok(())
    }

    fn export_data(&mut self, format: ExportFormat) -> Result<()> {
        let data = self.ask("Enter data to export: ")?;
        let filename = self.ask("Enter filename: ")?;
        let bytes = export(&data, &filename, format)?;
        writeln!(self.out, "Exported {bytes} bytes to {filename} as {format}.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.token(), choice.label())?;
        }
        write!(self.out, "Enter choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    fn report(&mut self, error: &Error) -> Result<()> {
        let mut message = error.to_string();
        let mut cause = std::error::Error::source(error);
        while let Some(inner) = cause {
            message.push_str(&format!(": {inner}"));
            cause = inner.source();
        }

        debug!(error = %message, "command failed");
        writeln!(self.err, "Error: {message}")?;
        Ok(())
    }

    /// One line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        // Running out of input mid-command behaves like an empty answer;
        // the next menu read then ends the loop.
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn ask_number(&mut self, prompt: &str, field: &'static str) -> Result<f64> {
        let answer = self.ask(prompt)?;
        Error::parse_number(field, &answer)
    }
}
