use tracing::debug;

use crate::model::{Location, WeatherVariable};

/// Records that can be removed by a string identity key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Location {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for WeatherVariable {
    fn key(&self) -> &str {
        &self.variable_name
    }
}

/// Append-ordered sequence of records. Keys may repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct Records<T> {
    items: Vec<T>,
}

impl<T> Default for Records<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Records<T> {
    pub fn add(&mut self, record: T) {
        self.items.push(record);
    }

    /// Drop every record whose key equals `name` and return how many went.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|r| r.key() != name);
        before - self.items.len()
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Locations and weather variables recorded during one session.
#[derive(Debug, Default)]
pub struct RecordStore {
    locations: Records<Location>,
    variables: Records<WeatherVariable>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_location(&mut self, location: Location) {
        debug!(name = %location.name, "adding location");
        self.locations.add(location);
    }

    pub fn remove_location(&mut self, name: &str) -> usize {
        let removed = self.locations.remove_by_name(name);
        debug!(name, removed, "removed locations");
        removed
    }

    pub fn locations(&self) -> &[Location] {
        self.locations.list()
    }

    pub fn add_variable(&mut self, variable: WeatherVariable) {
        debug!(name = %variable.variable_name, "adding weather variable");
        self.variables.add(variable);
    }

    pub fn remove_variable(&mut self, variable_name: &str) -> usize {
        let removed = self.variables.remove_by_name(variable_name);
        debug!(name = variable_name, removed, "removed weather variables");
        removed
    }

    pub fn variables(&self) -> &[WeatherVariable] {
        self.variables.list()
    }
}
