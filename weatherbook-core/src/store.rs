use tracing::{debug, warn};

use crate::{error::StoreError, model::{Record, TimeOfDay}};

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Append-only, fixed-capacity collection of records in insertion order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    capacity: usize,
}

impl RecordStore {
    /// `capacity` must be positive; a zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { records: Vec::with_capacity(capacity), capacity }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Append a record, or refuse with `Full` leaving the store untouched.
    pub fn insert(&mut self, record: Record) -> Result<(), StoreError> {
        if self.is_full() {
            warn!(capacity = self.capacity, "store full, record rejected");
            return Err(StoreError::Full { capacity: self.capacity, size: self.records.len() });
        }

        self.records.push(record);
        debug!(size = self.records.len(), capacity = self.capacity, "record stored");
        Ok(())
    }

    /// All records with exactly this date and period, oldest first.
    ///
    /// Dates are compared as plain strings. The returned vector is an owned
    /// copy and is unaffected by later inserts.
    pub fn query(&self, date: &str, time_of_day: TimeOfDay) -> Vec<Record> {
        let matches: Vec<Record> = self
            .records
            .iter()
            .filter(|r| r.date() == date && r.time_of_day() == time_of_day)
            .cloned()
            .collect();

        debug!(date, %time_of_day, matches = matches.len(), "query");
        matches
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
