use serde::{Deserialize, Serialize};

use crate::features::{fahrenheit_to_kelvin, rush_hour_flag};

/// Raw control values exactly as the form page posts them. Temperature is
/// still Fahrenheit here and the rush-hour flag does not exist yet.
#[derive(Debug, Clone, Deserialize)]
pub struct FormInput {
    pub holiday: String,
    pub temp_f: f64,
    pub weather_main: String,
    pub rain_1h: f64,
    pub snow_1h: f64,
    pub clouds_all: i64,
    pub hour: i64,
    pub day_of_week: i64,
    pub month: i64,
}

/// The ten-field record the prediction API expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficRecord {
    pub holiday: String,
    pub temp: f64,
    pub rain_1h: f64,
    pub snow_1h: f64,
    pub clouds_all: i64,
    pub weather_main: String,
    pub hour: i64,
    pub day_of_week: i64,
    pub month: i64,
    pub is_rush_hour: i64,
}

impl FormInput {
    /// Complete the record: convert the temperature to Kelvin and derive
    /// the rush-hour flag from the hour slider.
    pub fn into_record(self) -> TrafficRecord {
        let is_rush_hour = rush_hour_flag(self.hour);
        TrafficRecord {
            holiday: self.holiday,
            temp: fahrenheit_to_kelvin(self.temp_f),
            rain_1h: self.rain_1h,
            snow_1h: self.snow_1h,
            clouds_all: self.clouds_all,
            weather_main: self.weather_main,
            hour: self.hour,
            day_of_week: self.day_of_week,
            month: self.month,
            is_rush_hour,
        }
    }
}

/// What the prediction API replies with: exactly one of the two keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictOutcome {
    Volume { predicted_traffic_volume: i64 },
    Error { error: String },
}
