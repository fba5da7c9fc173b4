//! Plain-text rendering of records and query results.

use crate::{
    model::{Record, TimeOfDay},
    suitability::judge,
};

/// Multi-line rendering of one record followed by its travel suitability.
///
/// Lines, in order: temperature, humidity, phenomenon, date, time, suitability.
pub fn render(record: &Record) -> String {
    let suitability = judge(record);
    format!(
        "Temperature: {}°C\n\
         Humidity: {}%\n\
         Phenomenon: {}\n\
         Date: {}\n\
         Time: {}\n\
         Travel suitability: {}\n",
        record.temperature(),
        record.humidity(),
        record.phenomenon(),
        record.date(),
        record.time_of_day(),
        suitability.describe(),
    )
}

/// Numbered listing of query results, or a "no records" notice.
pub fn render_matches(date: &str, time_of_day: TimeOfDay, records: &[Record]) -> String {
    if records.is_empty() {
        return format!("No records found for:\nDate: {date}\nTime: {time_of_day}\n");
    }

    let mut out = format!("Found {} record(s) for {date} ({time_of_day}):\n\n", records.len());
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("Record #{}:\n{}\n", i + 1, render(record)));
    }
    out
}
