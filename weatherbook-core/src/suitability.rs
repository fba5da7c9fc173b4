use serde::Serialize;

use crate::model::Record;

pub const LOW_TEMPERATURE_C: i32 = -10;
pub const HIGH_TEMPERATURE_C: i32 = 35;
pub const LOW_HUMIDITY_PCT: i32 = 30;
pub const HIGH_HUMIDITY_PCT: i32 = 80;

/// Travel suitability derived from a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suitability {
    Suitable,
    Acceptable,
    NotIdeal,
    NotAdvisable,
    Dangerous,
    NotSuitable,
    NotComfortable,
    Unknown,
}

impl Suitability {
    /// Short label, e.g. "Not suitable".
    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::Suitable => "Suitable",
            Suitability::Acceptable => "Acceptable",
            Suitability::NotIdeal => "Not ideal",
            Suitability::NotAdvisable => "Not advisable",
            Suitability::Dangerous => "Dangerous",
            Suitability::NotSuitable => "Not suitable",
            Suitability::NotComfortable => "Not comfortable",
            Suitability::Unknown => "Unknown",
        }
    }

    /// Reason or advice shown next to the label.
    pub fn advice(&self) -> &'static str {
        match self {
            Suitability::Suitable => "ideal for travel",
            Suitability::Acceptable => "acceptable conditions",
            Suitability::NotIdeal => "bring rain gear",
            Suitability::NotAdvisable => "slippery conditions",
            Suitability::Dangerous => "avoid travel",
            Suitability::NotSuitable => "extreme temperature",
            Suitability::NotComfortable => "humidity issues",
            Suitability::Unknown => "unrecognized conditions",
        }
    }

    /// Label plus advice, e.g. "Not suitable (extreme temperature)".
    pub fn describe(&self) -> String {
        format!("{} ({})", self.as_str(), self.advice())
    }
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rate an observation for travel.
///
/// Temperature and humidity bands are checked before the phenomenon, so a
/// sunny day at 40°C is still `NotSuitable`. Bounds are exclusive: -10°C and
/// 35°C pass, as do 30% and 80%.
pub fn judge(record: &Record) -> Suitability {
    let temperature = record.temperature();
    if !(LOW_TEMPERATURE_C..=HIGH_TEMPERATURE_C).contains(&temperature) {
        return Suitability::NotSuitable;
    }

    let humidity = record.humidity();
    if !(LOW_HUMIDITY_PCT..=HIGH_HUMIDITY_PCT).contains(&humidity) {
        return Suitability::NotComfortable;
    }

    match record.phenomenon().to_lowercase().as_str() {
        "sunny" => Suitability::Suitable,
        "cloudy" => Suitability::Acceptable,
        "rainy" => Suitability::NotIdeal,
        "snowy" => Suitability::NotAdvisable,
        "stormy" => Suitability::Dangerous,
        _ => Suitability::Unknown,
    }
}
