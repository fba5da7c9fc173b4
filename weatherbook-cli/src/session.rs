//! Front-end state and message text, independent of the terminal.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use weatherbook_core::{
    AddError, RawFields, Record, StoreError, Suitability, TimeOfDay, WeatherBook, judge, render,
    render_matches,
};

/// A record paired with its rating, for JSON output.
#[derive(Debug, Serialize)]
struct RatedRecord<'a> {
    #[serde(flatten)]
    record: &'a Record,
    suitability: Suitability,
}

/// One interactive session: the weather book plus the current form values.
#[derive(Debug)]
pub struct Session {
    book: WeatherBook,
    form: RawFields,
    json: bool,
}

impl Session {
    pub fn new(book: WeatherBook, now: NaiveDateTime, json: bool) -> Self {
        Self { book, form: default_form(now), json }
    }

    pub fn book(&self) -> &WeatherBook {
        &self.book
    }

    /// Values the next prompt should be pre-filled with.
    pub fn form(&self) -> &RawFields {
        &self.form
    }

    pub fn welcome(&self) -> String {
        format!(
            "Welcome to Weather Record Book!\n\n\
             Instructions:\n\
             - Fill in weather details with 'Add record'\n\
             - Look up stored data by date and time with 'Query records'\n\
             - Travel suitability is assessed automatically\n\n\
             Current capacity: {} records\n",
            self.book.capacity()
        )
    }

    /// Try to store `fields`; the form keeps what was typed either way.
    pub fn add(&mut self, fields: RawFields) -> String {
        let outcome = self.book.add(&fields);
        self.form = fields;

        match outcome {
            Ok(record) => format!("Weather record added successfully!\n\n{}", render(&record)),
            Err(AddError::Invalid(err)) => format!("Error: {err}\n"),
            Err(AddError::Store(StoreError::Full { capacity, size })) => format!(
                "Error: Weather book is full!\n\
                 Maximum capacity: {capacity} records\n\
                 Current records: {size}\n"
            ),
        }
    }

    /// Look up records; the query keys become the form's date and time.
    pub fn query(&mut self, date: &str, time_of_day: &str) -> Result<String> {
        self.form.date = date.to_string();
        self.form.time_of_day = time_of_day.to_string();

        let matches = match self.book.query(date, time_of_day) {
            Ok(matches) => matches,
            Err(err) => {
                return Ok(format!(
                    "Error: Please enter a valid date and time (morning/afternoon): {err}\n"
                ));
            }
        };

        if self.json {
            let rated: Vec<RatedRecord<'_>> = matches
                .records
                .iter()
                .map(|record| RatedRecord { record, suitability: judge(record) })
                .collect();
            let mut out = serde_json::to_string_pretty(&rated)
                .context("Failed to serialize query results to JSON")?;
            out.push('\n');
            return Ok(out);
        }

        Ok(render_matches(&matches.date, matches.time_of_day, &matches.records))
    }

    /// Reset the form to defaults for `now`. Stored records are untouched.
    pub fn clear(&mut self, now: NaiveDateTime) {
        self.form = default_form(now);
    }
}

/// Empty measurements, today's date and the current period.
pub fn default_form(now: NaiveDateTime) -> RawFields {
    RawFields {
        date: now.format("%Y-%m-%d").to_string(),
        time_of_day: TimeOfDay::at(&now).to_string(),
        ..RawFields::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(h, 15, 0).unwrap()
    }

    fn fields(temperature: &str, phenomenon: &str, time: &str) -> RawFields {
        RawFields {
            temperature: temperature.into(),
            humidity: "50".into(),
            phenomenon: phenomenon.into(),
            date: "2024-05-01".into(),
            time_of_day: time.into(),
        }
    }

    #[test]
    fn form_defaults_follow_clock() {
        let morning = default_form(at(9));
        assert_eq!(morning.date, "2024-05-01");
        assert_eq!(morning.time_of_day, "morning");
        assert!(morning.temperature.is_empty());

        assert_eq!(default_form(at(13)).time_of_day, "afternoon");
    }

    #[test]
    fn welcome_mentions_capacity() {
        let session = Session::new(WeatherBook::new(7), at(9), false);
        assert!(session.welcome().contains("Current capacity: 7 records"));
    }

    #[test]
    fn add_reports_success_with_rendering() {
        let mut session = Session::new(WeatherBook::new(10), at(9), false);
        let out = session.add(fields("25", "sunny", "morning"));

        assert!(out.starts_with("Weather record added successfully!"));
        assert!(out.contains("Travel suitability: Suitable"));
        assert_eq!(session.book().len(), 1);
        assert_eq!(session.form().temperature, "25");
    }

    #[test]
    fn add_reports_first_validation_error() {
        let mut session = Session::new(WeatherBook::new(10), at(9), false);
        let out = session.add(fields("abc", "sunny", "morning"));

        assert!(out.starts_with("Error: invalid temperature 'abc'"));
        assert!(session.book().is_empty());
    }

    #[test]
    fn add_reports_full_with_counts() {
        let mut session = Session::new(WeatherBook::new(2), at(9), false);
        session.add(fields("20", "cloudy", "morning"));
        session.add(fields("21", "cloudy", "morning"));

        let out = session.add(fields("22", "cloudy", "morning"));
        assert!(out.contains("Weather book is full!"));
        assert!(out.contains("Maximum capacity: 2 records"));
        assert!(out.contains("Current records: 2"));
    }

    #[test]
    fn query_lists_matches() {
        let mut session = Session::new(WeatherBook::new(10), at(9), false);
        session.add(fields("25", "sunny", "morning"));

        let out = session.query("2024-05-01", "Morning").unwrap();
        assert!(out.starts_with("Found 1 record(s) for 2024-05-01 (morning):"));
        assert_eq!(session.form().time_of_day, "Morning");
    }

    #[test]
    fn query_report_uses_normalized_keys() {
        let mut session = Session::new(WeatherBook::new(10), at(9), false);
        session.add(fields("18", "cloudy", "afternoon"));

        let out = session.query(" 2024-05-01 ", "AFTERNOON").unwrap();
        assert!(out.starts_with("Found 1 record(s) for 2024-05-01 (afternoon):"));
    }

    #[test]
    fn query_without_matches() {
        let mut session = Session::new(WeatherBook::new(10), at(9), false);
        let out = session.query("1999-01-01", "afternoon").unwrap();
        assert!(out.starts_with("No records found for:"));
    }

    #[test]
    fn query_with_bad_time_reports_error() {
        let mut session = Session::new(WeatherBook::new(10), at(9), false);
        let out = session.query("2024-05-01", "noon").unwrap();
        assert!(out.starts_with("Error: Please enter a valid date and time"));
    }

    #[test]
    fn query_json_includes_suitability() {
        let mut session = Session::new(WeatherBook::new(10), at(9), true);
        session.add(fields("40", "sunny", "afternoon"));

        let out = session.query("2024-05-01", "afternoon").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["temperature"], 40);
        assert_eq!(value[0]["time_of_day"], "afternoon");
        assert_eq!(value[0]["suitability"], "not_suitable");
    }

    #[test]
    fn clear_resets_form_but_keeps_records() {
        let mut session = Session::new(WeatherBook::new(10), at(9), false);
        session.add(fields("25", "sunny", "morning"));

        session.clear(at(15));
        assert_eq!(session.form(), &default_form(at(15)));
        assert_eq!(session.book().len(), 1);
    }
}
