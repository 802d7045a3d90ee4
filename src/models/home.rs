use serde::Deserialize;

/// Summary block for the main screen: greeting plus today's weather.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummary {
    /// Assistant greeting line shown at the top of the home screen.
    pub greeting: Option<String>,

    pub weather: Option<WeatherSummary>,
}

/// Weather snapshot for the user's registered region.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub region_name: Option<String>,

    /// Current temperature in degrees Celsius.
    pub temp_current: Option<f64>,

    pub temp_min: Option<f64>,

    pub temp_max: Option<f64>,

    /// Relative humidity in percent.
    pub humidity: Option<i32>,

    /// Chance of precipitation in percent.
    pub precip_chance: Option<i32>,

    /// Sky condition as text (clear, rain, snow, ...).
    pub sky_condition: Option<String>,

    /// One-line weather summary sentence.
    pub summary: Option<String>,
}
