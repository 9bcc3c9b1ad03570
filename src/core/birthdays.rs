//! Upcoming birthday window with weekend rollover.
//!
//! Each birthday is anchored to the reference year (rolled to next year once
//! it has passed), then announced on its own weekday or, when it falls on a
//! weekend, on the following Monday. A contact is due when its birthday is
//! after today (or on today, if enabled) and its announcement day lies
//! within the window.

use crate::core::address_book::AddressBook;
use crate::domain::model::{Birthday, Record};
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
const DAYS_PER_WEEK: u32 = 7;

/// Days the report is bucketed by, in output order.
pub const BUSINESS_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: u32,
    pub include_today: bool,
}

impl BirthdayWindow {
    pub fn new(days: u32) -> Self {
        Self {
            days,
            include_today: false,
        }
    }

    pub fn including_today(mut self, include_today: bool) -> Self {
        self.include_today = include_today;
        self
    }

    fn lower_bound(&self) -> i64 {
        if self.include_today {
            0
        } else {
            1
        }
    }
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueBirthday {
    pub name: String,
    /// The next occurrence of the birthday, on or after today.
    pub occurs_on: NaiveDate,
    /// `occurs_on`, moved to Monday for weekend birthdays.
    pub congratulate_on: NaiveDate,
    pub days_until: i64,
}

impl DueBirthday {
    pub fn weekday(&self) -> Weekday {
        self.congratulate_on.weekday()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReport {
    today: NaiveDate,
    window: BirthdayWindow,
    entries: Vec<DueBirthday>,
}

impl BirthdayReport {
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn window(&self) -> BirthdayWindow {
        self.window
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[DueBirthday] {
        &self.entries
    }

    pub fn names_on(&self, weekday: Weekday) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.weekday() == weekday)
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Always the five business days, Monday first, including empty ones.
    pub fn by_weekday(&self) -> Vec<(Weekday, Vec<&str>)> {
        BUSINESS_DAYS
            .iter()
            .map(|&day| (day, self.names_on(day)))
            .collect()
    }

    /// Names grouped by congratulation date, earliest first. Unlike
    /// `by_weekday`, two different Mondays stay apart.
    pub fn by_date(&self) -> Vec<(NaiveDate, Vec<&str>)> {
        let mut groups: Vec<(NaiveDate, Vec<&str>)> = Vec::new();
        for entry in &self.entries {
            match groups.last_mut() {
                Some((day, names)) if *day == entry.congratulate_on => {
                    names.push(entry.name.as_str())
                }
                _ => groups.push((entry.congratulate_on, vec![entry.name.as_str()])),
            }
        }
        groups
    }

    /// True when the window covers more than seven calendar days, so one
    /// weekday can occur on two different dates.
    pub fn spans_several_weeks(&self) -> bool {
        self.window.days + u32::from(self.window.include_today) > DAYS_PER_WEEK
    }
}

/// Next occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = birthday.in_year(today.year());
    if this_year < today {
        birthday.in_year(today.year() + 1)
    } else {
        this_year
    }
}

/// Saturday and Sunday move to the following Monday.
pub fn congratulation_day(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date + Days::new(shift)
}

fn due_entry(record: &Record, today: NaiveDate, window: BirthdayWindow) -> Option<DueBirthday> {
    let birthday = record.birthday()?;
    let occurs_on = next_occurrence(birthday, today);
    let days_until = (occurs_on - today).num_days();
    if days_until < window.lower_bound() {
        return None;
    }

    let congratulate_on = congratulation_day(occurs_on);
    if (congratulate_on - today).num_days() > i64::from(window.days) {
        return None;
    }

    Some(DueBirthday {
        name: record.name().to_string(),
        occurs_on,
        congratulate_on,
        days_until,
    })
}

/// Contacts whose birthday is due within `window` days of `today`, ordered by
/// days until the birthday, then by name.
pub fn due_within(book: &AddressBook, today: NaiveDate, window: BirthdayWindow) -> BirthdayReport {
    let mut entries: Vec<DueBirthday> = book
        .records()
        .filter_map(|record| due_entry(record, today, window))
        .collect();
    // stable sort keeps the book's name order for ties
    entries.sort_by_key(|entry| entry.days_until);

    tracing::debug!(
        "Birthday window from {} over {} days: {} due",
        today,
        window.days,
        entries.len()
    );

    BirthdayReport {
        today,
        window,
        entries,
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
