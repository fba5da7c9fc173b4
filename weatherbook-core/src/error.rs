use thiserror::Error;

/// One of the five user-supplied fields of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Temperature,
    Humidity,
    Phenomenon,
    Date,
    TimeOfDay,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::Humidity => "humidity",
            Field::Phenomenon => "phenomenon",
            Field::Date => "date",
            Field::TimeOfDay => "time",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why raw field input could not be turned into a [`crate::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(Field),

    #[error("invalid temperature '{0}': must be an integer between -273°C and 100°C")]
    InvalidTemperature(String),

    #[error("invalid humidity '{0}': must be an integer between 0% and 100%")]
    InvalidHumidity(String),

    #[error("invalid time of day '{0}': must be either 'morning' or 'afternoon'")]
    InvalidTimeOfDay(String),
}

/// Store-level rejection. Nothing is written when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("weather book is full ({size}/{capacity} records)")]
    Full { capacity: usize, size: usize },
}

/// Failure of the combined validate-then-insert operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
