//! Interactive terminal loop on top of [`Session`].

use anyhow::{Context, Result};
use chrono::Local;
use inquire::{InquireError, Select, Text, error::InquireResult};
use weatherbook_core::RawFields;

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Query,
    Clear,
    Quit,
}

impl Action {
    const fn all() -> &'static [Action] {
        &[Action::Add, Action::Query, Action::Clear, Action::Quit]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Add => "Add record",
            Action::Query => "Query records",
            Action::Clear => "Clear fields",
            Action::Quit => "Quit",
        })
    }
}

/// What the user did with a single prompt.
#[derive(Debug, PartialEq, Eq)]
enum Answer<T> {
    Value(T),
    /// Esc: abandon the current form and show the menu again.
    Back,
    /// Ctrl-C: end the session.
    Quit,
}

/// Sort a prompt result into an answer; other inquire errors stay errors.
fn answer<T>(result: InquireResult<T>) -> Result<Answer<T>, InquireError> {
    match result {
        Ok(value) => Ok(Answer::Value(value)),
        Err(InquireError::OperationCanceled) => Ok(Answer::Back),
        Err(InquireError::OperationInterrupted) => Ok(Answer::Quit),
        Err(err) => Err(err),
    }
}

/// Drive `session` until the user quits.
///
/// Esc inside a form returns to the menu; Ctrl-C anywhere, or Esc at the
/// menu, ends the session.
pub fn run(mut session: Session) -> Result<()> {
    println!("{}", session.welcome());

    loop {
        let menu = Select::new("What would you like to do?", Action::all().to_vec()).prompt();
        let action = match answer(menu).context("Failed to read menu selection")? {
            Answer::Value(action) => action,
            Answer::Back | Answer::Quit => break,
        };

        match action {
            Action::Add => match ask_record(session.form())? {
                Answer::Value(fields) => println!("{}", session.add(fields)),
                Answer::Back => {}
                Answer::Quit => break,
            },
            Action::Query => match ask_query(session.form())? {
                Answer::Value((date, time)) => println!("{}", session.query(&date, &time)?),
                Answer::Back => {}
                Answer::Quit => break,
            },
            Action::Clear => {
                session.clear(Local::now().naive_local());
                println!("Fields reset.\n");
            }
            Action::Quit => break,
        }
    }

    tracing::debug!(records = session.book().len(), "session finished");
    Ok(())
}

/// Unwrap an [`Answer::Value`] or return the Back/Quit answer from the caller.
macro_rules! field {
    ($answer:expr) => {
        match $answer {
            Answer::Value(value) => value,
            Answer::Back => return Ok(Answer::Back),
            Answer::Quit => return Ok(Answer::Quit),
        }
    };
}

fn ask_record(form: &RawFields) -> Result<Answer<RawFields>> {
    let temperature = field!(ask("Temperature (°C):", &form.temperature, "e.g. 25")?);
    let humidity = field!(ask("Humidity (%):", &form.humidity, "e.g. 65")?);
    let phenomenon = field!(ask("Phenomenon:", &form.phenomenon, "e.g. sunny, rainy, cloudy")?);
    let date = field!(ask("Date:", &form.date, "YYYY-MM-DD")?);
    let time_of_day = field!(ask("Time of day:", &form.time_of_day, "morning or afternoon")?);

    Ok(Answer::Value(RawFields { temperature, humidity, phenomenon, date, time_of_day }))
}

fn ask_query(form: &RawFields) -> Result<Answer<(String, String)>> {
    let date = field!(ask("Date:", &form.date, "YYYY-MM-DD")?);
    let time_of_day = field!(ask("Time of day:", &form.time_of_day, "morning or afternoon")?);

    Ok(Answer::Value((date, time_of_day)))
}

/// One text field, pre-filled with `initial`.
fn ask(label: &str, initial: &str, placeholder: &str) -> Result<Answer<String>> {
    let result = Text::new(label)
        .with_initial_value(initial)
        .with_placeholder(placeholder)
        .prompt();
    answer(result).with_context(|| format!("Failed to read field '{label}'"))
}
