use serde::{Deserialize, Serialize};

/// Holiday names the pipeline was trained on, in training-column order.
pub const HOLIDAY_OPTIONS: [&str; 12] = [
    "None",
    "Martin Luther King Jr Day",
    "Columbus Day",
    "State Fair",
    "Veterans Day",
    "Thanksgiving Day",
    "Christmas Day",
    "New Years Day",
    "Washingtons Birthday",
    "Memorial Day",
    "Independence Day",
    "Labor Day",
];

/// Weather conditions the pipeline was trained on, in training-column order.
pub const WEATHER_OPTIONS: [&str; 11] = [
    "Clouds",
    "Clear",
    "Rain",
    "Drizzle",
    "Mist",
    "Haze",
    "Fog",
    "Thunderstorm",
    "Snow",
    "Squall",
    "Smoke",
];

/// Width of the model input: 8 numeric columns plus the two one-hot blocks.
pub const FEATURE_DIM: usize = 8 + HOLIDAY_OPTIONS.len() + WEATHER_OPTIONS.len();

/// One hour of conditions on the interstate. Missing fields take the
/// defaults below; a present field with the wrong type is rejected by the
/// JSON extractor before any handler runs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TrafficData {
    #[serde(default = "default_holiday")]
    pub holiday: String,
    /// Ambient temperature in Kelvin.
    #[serde(default = "default_temp")]
    pub temp: f64,
    #[serde(default)]
    pub rain_1h: f64,
    #[serde(default)]
    pub snow_1h: f64,
    #[serde(default = "default_clouds_all")]
    pub clouds_all: i64,
    #[serde(default = "default_weather_main")]
    pub weather_main: String,
    #[serde(default = "default_hour")]
    pub hour: i64,
    /// 0 = Monday .. 6 = Sunday.
    #[serde(default = "default_day_of_week")]
    pub day_of_week: i64,
    #[serde(default = "default_month")]
    pub month: i64,
    #[serde(default = "default_is_rush_hour")]
    pub is_rush_hour: i64,
}

fn default_holiday() -> String {
    "None".to_string()
}

fn default_temp() -> f64 {
    288.28
}

fn default_clouds_all() -> i64 {
    40
}

fn default_weather_main() -> String {
    "Clouds".to_string()
}

fn default_hour() -> i64 {
    9
}

fn default_day_of_week() -> i64 {
    1
}

fn default_month() -> i64 {
    10
}

fn default_is_rush_hour() -> i64 {
    1
}

impl TrafficData {
    /// Flatten the record into the `[1, FEATURE_DIM]` layout the exported
    /// pipeline expects: numerics first, then the holiday and weather
    /// one-hot blocks. A categorical value outside the known option set
    /// leaves its block all-zero, matching the trainer's unknown-category
    /// handling.
    pub fn to_feature_vector(&self) -> [f32; FEATURE_DIM] {
        let mut features = [0.0f32; FEATURE_DIM];
        features[0] = self.temp as f32;
        features[1] = self.rain_1h as f32;
        features[2] = self.snow_1h as f32;
        features[3] = self.clouds_all as f32;
        features[4] = self.hour as f32;
        features[5] = self.day_of_week as f32;
        features[6] = self.month as f32;
        features[7] = self.is_rush_hour as f32;

        if let Some(i) = HOLIDAY_OPTIONS.iter().position(|&h| h == self.holiday) {
            features[8 + i] = 1.0;
        }
        if let Some(i) = WEATHER_OPTIONS.iter().position(|&w| w == self.weather_main) {
            features[8 + HOLIDAY_OPTIONS.len() + i] = 1.0;
        }

        features
    }
}

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_traffic_volume: i64,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_takes_documented_defaults() {
        let data: TrafficData = serde_json::from_str("{}").unwrap();
        assert_eq!(data.holiday, "None");
        assert_eq!(data.temp, 288.28);
        assert_eq!(data.rain_1h, 0.0);
        assert_eq!(data.snow_1h, 0.0);
        assert_eq!(data.clouds_all, 40);
        assert_eq!(data.weather_main, "Clouds");
        assert_eq!(data.hour, 9);
        assert_eq!(data.day_of_week, 1);
        assert_eq!(data.month, 10);
        assert_eq!(data.is_rush_hour, 1);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_value::<TrafficData>(json!({ "temp": "hot" }));
        assert!(result.is_err());

        let result = serde_json::from_value::<TrafficData>(json!({ "hour": "nine" }));
        assert!(result.is_err());
    }

    #[test]
    fn feature_vector_layout() {
        let data = TrafficData {
            holiday: "Labor Day".to_string(),
            temp: 295.15,
            rain_1h: 1.5,
            snow_1h: 0.0,
            clouds_all: 75,
            weather_main: "Snow".to_string(),
            hour: 17,
            day_of_week: 0,
            month: 6,
            is_rush_hour: 1,
        };

        let v = data.to_feature_vector();
        assert_eq!(v.len(), FEATURE_DIM);
        assert_eq!(v[0], 295.15);
        assert_eq!(v[1], 1.5);
        assert_eq!(v[3], 75.0);
        assert_eq!(v[4], 17.0);
        assert_eq!(v[7], 1.0);

        // "Labor Day" is the last holiday column, "Snow" the ninth weather column.
        assert_eq!(v[8 + 11], 1.0);
        assert_eq!(v[8..20].iter().sum::<f32>(), 1.0);
        assert_eq!(v[20 + 8], 1.0);
        assert_eq!(v[20..31].iter().sum::<f32>(), 1.0);
    }

    #[test]
    fn unknown_category_encodes_as_zeroes() {
        let data = TrafficData {
            holiday: "Mardi Gras".to_string(),
            weather_main: "Meteor Shower".to_string(),
            ..serde_json::from_str("{}").unwrap()
        };

        let v = data.to_feature_vector();
        assert!(v[8..].iter().all(|&x| x == 0.0));
    }
}
