//! The fixed option sets rendered by the form, and the two values the
//! client derives instead of asking for.

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

/// Indexed 0..6 to match the model's `day_of_week` encoding.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// 1 when the hour falls in a commute window (07:00-09:00 or 16:00-18:00,
/// both inclusive), else 0.
pub fn rush_hour_flag(hour: i64) -> i64 {
    if (7..=9).contains(&hour) || (16..=18).contains(&hour) {
        1
    } else {
        0
    }
}

/// The slider is Fahrenheit; the model was trained on Kelvin. Rounded to
/// two decimals.
pub fn fahrenheit_to_kelvin(temp_f: f64) -> f64 {
    let kelvin = (temp_f - 32.0) * 5.0 / 9.0 + 273.15;
    (kelvin * 100.0).round() / 100.0
}
