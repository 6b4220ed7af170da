use std::fmt;

/// A named point on the map. The name is the identity key, not unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { name: name.into(), latitude, longitude }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Latitude: {}, Longitude: {}",
            self.name, self.latitude, self.longitude
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherVariable {
    pub variable_name: String,
    pub value: f64,
}

impl WeatherVariable {
    pub fn new(variable_name: impl Into<String>, value: f64) -> Self {
        Self { variable_name: variable_name.into(), value }
    }
}

impl fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable: {}, Value: {}", self.variable_name, self.value)
    }
}
