//! Core library for the `weatherbook` tool.
//!
//! This crate defines:
//! - Weather records and validation of raw field input
//! - The fixed-capacity record store and lookup by date and time of day
//! - Travel suitability rules and plain-text rendering
//! - Configuration handling
//!
//! It has no UI dependencies; `weatherbook-cli` is one front end over it.

pub mod book;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod store;
pub mod suitability;

pub use book::{Matches, WeatherBook};
pub use config::Config;
pub use error::{AddError, Field, StoreError, ValidationError};
pub use format::{render, render_matches};
pub use model::{RawFields, Record, TimeOfDay};
pub use store::{DEFAULT_CAPACITY, RecordStore};
pub use suitability::{Suitability, judge};
