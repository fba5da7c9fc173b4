use tracing::debug;

use crate::{
    error::{AddError, Field, ValidationError},
    model::{RawFields, Record, TimeOfDay},
    store::RecordStore,
};

/// Result of a lookup: the normalized keys and the matching records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches {
    pub date: String,
    pub time_of_day: TimeOfDay,
    pub records: Vec<Record>,
}

/// Entry point for front ends: validation plus the record store.
///
/// Construct one per session and hand it to whatever drives the UI.
#[derive(Debug, Clone, Default)]
pub struct WeatherBook {
    store: RecordStore,
}

impl WeatherBook {
    pub fn new(capacity: usize) -> Self {
        Self { store: RecordStore::new(capacity) }
    }

    /// Validate `raw` and store the resulting record.
    ///
    /// Validation errors take precedence over a full store, and nothing is
    /// stored on any error.
    pub fn add(&mut self, raw: &RawFields) -> Result<Record, AddError> {
        let record = Record::from_raw(raw).inspect_err(|err| debug!(%err, "rejected input"))?;
        self.store.insert(record.clone())?;
        Ok(record)
    }

    /// Look up records by raw date and period text.
    ///
    /// The date is trimmed but otherwise compared verbatim; the period is
    /// case-insensitive. No matches is `Ok` with empty `records`.
    pub fn query(&self, date: &str, time_of_day: &str) -> Result<Matches, ValidationError> {
        let date = date.trim();
        if date.is_empty() {
            return Err(ValidationError::EmptyField(Field::Date));
        }
        if time_of_day.trim().is_empty() {
            return Err(ValidationError::EmptyField(Field::TimeOfDay));
        }
        let time_of_day = TimeOfDay::try_from(time_of_day)?;

        Ok(Matches {
            date: date.to_string(),
            time_of_day,
            records: self.store.query(date, time_of_day),
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }
}
