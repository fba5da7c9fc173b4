use chrono::Timelike;
use serde::Serialize;

use crate::error::{Field, ValidationError};

pub const MIN_TEMPERATURE_C: i32 = -273;
pub const MAX_TEMPERATURE_C: i32 = 100;
pub const MIN_HUMIDITY_PCT: i32 = 0;
pub const MAX_HUMIDITY_PCT: i32 = 100;

/// Coarse period of the day an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
        }
    }

    pub const fn all() -> &'static [TimeOfDay] {
        &[TimeOfDay::Morning, TimeOfDay::Afternoon]
    }

    /// Period containing the given wall-clock time: before noon is morning.
    pub fn at<T: Timelike>(time: &T) -> Self {
        if time.hour() < 12 { TimeOfDay::Morning } else { TimeOfDay::Afternoon }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = ValidationError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            _ => Err(ValidationError::InvalidTimeOfDay(value.trim().to_string())),
        }
    }
}

/// Unvalidated field text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub temperature: String,
    pub humidity: String,
    pub phenomenon: String,
    pub date: String,
    pub time_of_day: String,
}

impl RawFields {
    fn fields(&self) -> [(Field, &str); 5] {
        [
            (Field::Temperature, self.temperature.as_str()),
            (Field::Humidity, self.humidity.as_str()),
            (Field::Phenomenon, self.phenomenon.as_str()),
            (Field::Date, self.date.as_str()),
            (Field::TimeOfDay, self.time_of_day.as_str()),
        ]
    }
}

/// A single validated weather observation.
///
/// Only obtainable through [`Record::from_raw`], so every value in circulation
/// has passed validation. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    temperature: i32,
    humidity: i32,
    phenomenon: String,
    date: String,
    time_of_day: TimeOfDay,
}

impl Record {
    /// Validate raw input and build a record.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// 1. any field blank after trimming
    /// 2. temperature not an integer in [-273, 100]
    /// 3. humidity not an integer in [0, 100]
    /// 4. time of day not "morning"/"afternoon" (case-insensitive)
    pub fn from_raw(raw: &RawFields) -> Result<Self, ValidationError> {
        if let Some((field, _)) = raw.fields().into_iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError::EmptyField(field));
        }

        let temperature = parse_in_range(&raw.temperature, MIN_TEMPERATURE_C, MAX_TEMPERATURE_C)
            .ok_or_else(|| {
                ValidationError::InvalidTemperature(raw.temperature.trim().to_string())
            })?;

        let humidity = parse_in_range(&raw.humidity, MIN_HUMIDITY_PCT, MAX_HUMIDITY_PCT)
            .ok_or_else(|| ValidationError::InvalidHumidity(raw.humidity.trim().to_string()))?;

        let time_of_day = TimeOfDay::try_from(raw.time_of_day.as_str())?;

        Ok(Self {
            temperature,
            humidity,
            phenomenon: raw.phenomenon.trim().to_string(),
            date: raw.date.trim().to_string(),
            time_of_day,
        })
    }

    /// Degrees Celsius.
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> i32 {
        self.humidity
    }

    pub fn phenomenon(&self) -> &str {
        &self.phenomenon
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }
}

fn parse_in_range(raw: &str, min: i32, max: i32) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|v| (min..=max).contains(v))
}

#[cfg(test)]
pub(crate) fn raw(
    temperature: &str,
    humidity: &str,
    phenomenon: &str,
    date: &str,
    time: &str,
) -> RawFields {
    RawFields {
        temperature: temperature.to_string(),
        humidity: humidity.to_string(),
        phenomenon: phenomenon.to_string(),
        date: date.to_string(),
        time_of_day: time.to_string(),
    }
}
