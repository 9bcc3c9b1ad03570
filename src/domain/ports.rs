use chrono::NaiveDate;

/// Source of "today" for birthday queries and the `DD.MM` shorthand.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub trait ConfigProvider {
    fn greeting(&self) -> &str;
    fn prompt(&self) -> &str;
    fn window_days(&self) -> u32;
    fn include_today(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
