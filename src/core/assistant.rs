use crate::config::MAX_WINDOW_DAYS;
use crate::core::address_book::AddressBook;
use crate::core::birthdays::{due_within, weekday_name, BirthdayReport, BirthdayWindow};
use crate::core::commands::{help_text, Command, CommandKind, COMMANDS};
use crate::domain::model::Record;
use crate::domain::ports::{Clock, ConfigProvider};
use crate::utils::error::{AssistantError, Result};
use crate::utils::validation::validate_range;
use chrono::Datelike;
use std::io::{BufRead, Write};

pub const GOODBYE: &str = "Goodbye!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Exit(String),
    Silent,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

/// Owns the address book for one session and answers one command line at a
/// time.
pub struct Assistant<C: Clock, P: ConfigProvider> {
    book: AddressBook,
    clock: C,
    config: P,
}

impl<C: Clock, P: ConfigProvider> Assistant<C, P> {
    pub fn new(clock: C, config: P) -> Self {
        Self::with_book(AddressBook::new(), clock, config)
    }

    pub fn with_book(book: AddressBook, clock: C, config: P) -> Self {
        Self {
            book,
            clock,
            config,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Errors become reply text here; only I/O in `run` can fail a session.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let outcome = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command),
            None => Ok(Reply::Silent),
        });

        match outcome {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_user_input() {
                    tracing::debug!("Rejected command: {} (Category: {:?})", e, e.category());
                } else {
                    tracing::warn!(
                        "Command failed: {} (Category: {:?}, Severity: {:?})",
                        e,
                        e.category(),
                        e.severity()
                    );
                }
                tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
                Reply::Message(e.user_friendly_message())
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        tracing::debug!("Executing {:?}", command);

        match command {
            Command::Hello => Ok(Reply::message("How can I help you?")),
            Command::Add {
                name,
                phone,
                birthday,
            } => {
                let mut record = Record::new(name)?;
                record.add_phone(&phone)?;
                if let Some(birthday) = birthday {
                    record.add_birthday(&self.complete_birthday(&birthday))?;
                }
                self.book.add_record(record);
                Ok(Reply::message("Contact added."))
            }
            Command::ChangePhone { name, old, new } => {
                let record = self.record_mut(&name)?;
                let old =
                    old.or_else(|| record.phones().first().map(|p| p.as_str().to_string()));
                match old {
                    Some(old) => record.edit_phone(&old, &new)?,
                    None => record.add_phone(&new)?,
                }
                Ok(Reply::message("Phone number changed."))
            }
            Command::ShowPhones { name } => {
                let record = self.record(&name)?;
                if record.phones().is_empty() {
                    return Ok(Reply::Message(format!(
                        "No phone numbers found for {name}."
                    )));
                }
                let phones = record
                    .phones()
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Ok(Reply::Message(format!("Phone numbers {name}: {phones}")))
            }
            Command::RemovePhone { name, phone } => {
                let record = self.record_mut(&name)?;
                if record.remove_phone(&phone) == 0 {
                    return Err(AssistantError::PhoneNotFound { name, phone });
                }
                Ok(Reply::message("Phone number removed."))
            }
            Command::All => {
                if self.book.is_empty() {
                    return Ok(Reply::message("Address book is empty."));
                }
                let lines: Vec<String> =
                    self.book.records().map(Record::to_display_string).collect();
                Ok(Reply::Message(lines.join("\n")))
            }
            Command::AddBirthday { name, birthday } => {
                let birthday = self.complete_birthday(&birthday);
                self.record_mut(&name)?.add_birthday(&birthday)?;
                Ok(Reply::message("Birthday added."))
            }
            Command::ShowBirthday { name } => {
                Ok(Reply::Message(self.record(&name)?.show_birthday()))
            }
            Command::Birthdays { days } => {
                let window = self.window(days.as_deref())?;
                let report = due_within(&self.book, self.clock.today(), window);
                Ok(Reply::Message(render_report(&report)))
            }
            Command::Delete { name } => {
                self.book
                    .delete(&name)
                    .ok_or(AssistantError::ContactNotFound { name })?;
                Ok(Reply::message("Contact deleted."))
            }
            Command::Help => Ok(Reply::Message(help_text())),
            Command::Exit => Ok(Reply::Exit(GOODBYE.to_string())),
        }
    }

    /// Prints the greeting, then reads commands until `close`/`exit` or end of
    /// input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", self.config.greeting())?;

        let mut line = String::new();
        loop {
            write!(output, "{}", self.config.prompt())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input, closing session");
                writeln!(output)?;
                break;
            }

            match self.handle_line(&line) {
                Reply::Message(text) => writeln!(output, "{}", text)?,
                Reply::Silent => {}
                Reply::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
            }
        }

        tracing::info!("Session finished with {} contacts", self.book.len());
        Ok(())
    }

    fn record(&self, name: &str) -> Result<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| AssistantError::ContactNotFound {
                name: name.to_string(),
            })
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| AssistantError::ContactNotFound {
                name: name.to_string(),
            })
    }

    /// `DD.MM` is completed with the current year.
    fn complete_birthday(&self, value: &str) -> String {
        if value.split('.').count() == 2 {
            format!("{}.{}", value, self.clock.today().year())
        } else {
            value.to_string()
        }
    }

    fn window(&self, days: Option<&str>) -> Result<BirthdayWindow> {
        let days = match days {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|days| {
                    validate_range("birthdays.window_days", *days, 1, MAX_WINDOW_DAYS).is_ok()
                })
                .ok_or_else(|| AssistantError::InvalidArgumentCount {
                    command: "birthdays".to_string(),
                    usage: birthdays_usage().to_string(),
                })?,
            None => self.config.window_days(),
        };
        Ok(BirthdayWindow::new(days).including_today(self.config.include_today()))
    }
}

fn birthdays_usage() -> &'static str {
    COMMANDS
        .iter()
        .find(|spec| spec.kind == CommandKind::Birthdays)
        .map(|spec| spec.usage)
        .unwrap_or("birthdays")
}

fn period_label(days: u32) -> String {
    match days {
        1 => "the next day".to_string(),
        7 => "the next week".to_string(),
        n => format!("the next {} days", n),
    }
}

pub fn render_report(report: &BirthdayReport) -> String {
    let period = period_label(report.window().days);
    if report.is_empty() {
        return format!("No upcoming birthdays in {}.", period);
    }

    let mut lines = vec![format!("Upcoming birthdays in {}:", period)];
    if report.spans_several_weeks() {
        for (day, names) in report.by_date() {
            lines.push(format!(
                "{} {}: {}",
                weekday_name(day.weekday()),
                day.format("%d.%m.%Y"),
                names.join(", ")
            ));
        }
        return lines.join("\n");
    }
    for (weekday, names) in report.by_weekday() {
        if !names.is_empty() {
            lines.push(format!("{}: {}", weekday_name(weekday), names.join(", ")));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssistantSettings;
    use crate::domain::ports::FixedClock;
    use chrono::NaiveDate;

    fn assistant(today: NaiveDate) -> Assistant<FixedClock, AssistantSettings> {
        Assistant::new(FixedClock(today), AssistantSettings::default())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Message(text) | Reply::Exit(text) => text,
            Reply::Silent => String::new(),
        }
    }

    #[test]
    fn test_add_and_show_phone() {
        let mut bot = assistant(date(2024, 10, 23));
        assert_eq!(text(bot.handle_line("add Ann 0123456789")), "Contact added.");
        assert_eq!(
            text(bot.handle_line("phone Ann")),
            "Phone numbers Ann: 0123456789"
        );
        assert_eq!(text(bot.handle_line("phone Bob")), "Contact not found.");
    }

    #[test]
    fn test_change_without_old_replaces_first_phone() {
        let mut bot = assistant(date(2024, 10, 23));
        bot.handle_line("add Ann 0123456789");
        assert_eq!(
            text(bot.handle_line("change Ann 1111111111")),
            "Phone number changed."
        );
        assert_eq!(
            text(bot.handle_line("phone Ann")),
            "Phone numbers Ann: 1111111111"
        );
    }

    #[test]
    fn test_short_birthday_gets_current_year() {
        let mut bot = assistant(date(2024, 10, 23));
        bot.handle_line("add Ann 0123456789");
        assert_eq!(text(bot.handle_line("add-birthday Ann 26.10")), "Birthday added.");
        assert_eq!(text(bot.handle_line("show-birthday Ann")), "26.10.2024");
    }

    #[test]
    fn test_invalid_input_becomes_message() {
        let mut bot = assistant(date(2024, 10, 23));
        assert_eq!(
            text(bot.handle_line("add Ann 123")),
            "Invalid phone number format. Use 10 digits."
        );
        assert!(bot.book().is_empty());
        assert_eq!(text(bot.handle_line("jump")), "Invalid command.");
        assert_eq!(bot.handle_line("   "), Reply::Silent);
    }

    #[test]
    fn test_birthdays_days_argument_must_be_in_range() {
        let mut bot = assistant(date(2024, 10, 23));
        let usage = "Invalid command. Usage: birthdays [days (optional)]";
        assert_eq!(text(bot.handle_line("birthdays 0")), usage);
        assert_eq!(text(bot.handle_line("birthdays 367")), usage);
        assert_eq!(text(bot.handle_line("birthdays 100000")), usage);
        assert_eq!(text(bot.handle_line("birthdays soon")), usage);
        assert_eq!(
            text(bot.handle_line("birthdays 366")),
            "No upcoming birthdays in the next 366 days."
        );
        assert_eq!(
            text(bot.handle_line("birthdays 30")),
            "No upcoming birthdays in the next 30 days."
        );
    }

    #[test]
    fn test_exit_reply() {
        let mut bot = assistant(date(2024, 10, 23));
        assert_eq!(bot.handle_line("exit"), Reply::Exit(GOODBYE.to_string()));
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(7), "the next week");
        assert_eq!(period_label(1), "the next day");
        assert_eq!(period_label(10), "the next 10 days");
    }
}
