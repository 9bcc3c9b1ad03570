use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use contact_assistant::{due_within, AddressBook, BirthdayWindow, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with(birthdays: &[(&str, Option<&str>)]) -> Result<AddressBook> {
    let mut book = AddressBook::new();
    for (name, birthday) in birthdays {
        let mut record = Record::new(*name)?;
        record.add_phone("0123456789")?;
        if let Some(birthday) = birthday {
            record.add_birthday(birthday)?;
        }
        book.add_record(record);
    }
    Ok(book)
}

// 2024-10-21 is a Monday.
fn monday() -> NaiveDate {
    date(2024, 10, 21)
}

#[test]
fn test_natural_weekday_and_weekend_rollover() -> Result<()> {
    let book = book_with(&[("Ann", Some("24.10.1990")), ("Bob", Some("26.10.1985"))])?;

    let report = due_within(&book, monday(), BirthdayWindow::default());

    assert_eq!(report.names_on(Weekday::Thu), vec!["Ann"]);
    assert_eq!(report.names_on(Weekday::Mon), vec!["Bob"]);
    for (weekday, names) in report.by_weekday() {
        if weekday != Weekday::Thu {
            assert!(!names.contains(&"Ann"), "Ann listed on {:?}", weekday);
        }
        if weekday != Weekday::Mon {
            assert!(!names.contains(&"Bob"), "Bob listed on {:?}", weekday);
        }
    }

    let bob = &report.entries()[1];
    assert_eq!(bob.occurs_on, date(2024, 10, 26));
    assert_eq!(bob.congratulate_on, date(2024, 10, 28));
    assert_eq!(bob.days_until, 5);
    Ok(())
}

#[test]
fn test_buckets_are_the_five_business_days() -> Result<()> {
    let book = book_with(&[("Sat", Some("26.10.2000")), ("Sun", Some("27.10.2000"))])?;
    let report = due_within(&book, monday(), BirthdayWindow::default());

    let days: Vec<Weekday> = report.by_weekday().into_iter().map(|(d, _)| d).collect();
    assert_eq!(
        days,
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri
        ]
    );
    assert!(report.names_on(Weekday::Sat).is_empty());
    assert!(report.names_on(Weekday::Sun).is_empty());
    assert_eq!(report.names_on(Weekday::Mon), vec!["Sat", "Sun"]);
    Ok(())
}

#[test]
fn test_window_upper_bound_is_inclusive() -> Result<()> {
    let book = book_with(&[("Edge", Some("28.10.1990")), ("Past", Some("29.10.1990"))])?;

    let report = due_within(&book, monday(), BirthdayWindow::new(7));
    let names: Vec<&str> = report.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Edge"]);

    let report = due_within(&book, monday(), BirthdayWindow::new(8));
    assert_eq!(report.len(), 2);
    Ok(())
}

#[test]
fn test_short_window_boundary() -> Result<()> {
    let book = book_with(&[("Thu", Some("24.10.1990")), ("Fri", Some("25.10.1990"))])?;

    let report = due_within(&book, monday(), BirthdayWindow::new(3));
    assert_eq!(report.names_on(Weekday::Thu), vec!["Thu"]);
    assert!(report.names_on(Weekday::Fri).is_empty());
    Ok(())
}

#[test]
fn test_today_is_excluded_unless_enabled() -> Result<()> {
    let book = book_with(&[("Today", Some("21.10.1990"))])?;

    let report = due_within(&book, monday(), BirthdayWindow::default());
    assert!(report.is_empty());

    let report = due_within(
        &book,
        monday(),
        BirthdayWindow::default().including_today(true),
    );
    assert_eq!(report.names_on(Weekday::Mon), vec!["Today"]);
    assert_eq!(report.entries()[0].days_until, 0);
    Ok(())
}

#[test]
fn test_weekend_beyond_window_after_rollover_is_dropped() -> Result<()> {
    // 2024-10-27 is a Sunday; the next Saturday would be announced 8 days out.
    let sunday = date(2024, 10, 27);
    let book = book_with(&[
        ("NextSat", Some("02.11.1990")),
        ("NextSun", Some("03.11.1990")),
        ("Tomorrow", Some("28.10.1990")),
    ])?;

    let report = due_within(&book, sunday, BirthdayWindow::default());
    let names: Vec<&str> = report.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Tomorrow"]);
    Ok(())
}

#[test]
fn test_birthdays_after_new_year_are_found() -> Result<()> {
    // 2024-12-30 is a Monday.
    let book = book_with(&[("Jan2", Some("02.01.1990")), ("Jan4", Some("04.01.1990"))])?;

    let report = due_within(&book, date(2024, 12, 30), BirthdayWindow::default());
    assert_eq!(report.names_on(Weekday::Thu), vec!["Jan2"]);
    assert_eq!(report.names_on(Weekday::Mon), vec!["Jan4"]);
    assert_eq!(report.entries()[0].occurs_on, date(2025, 1, 2));
    Ok(())
}

#[test]
fn test_leap_day_birthday_in_common_year() -> Result<()> {
    // 2025-02-24 is a Monday; 29.02 is observed on Friday 28.02.2025.
    let book = book_with(&[("Leap", Some("29.02.2000"))])?;

    let report = due_within(&book, date(2025, 2, 24), BirthdayWindow::default());
    assert_eq!(report.names_on(Weekday::Fri), vec!["Leap"]);
    assert_eq!(report.entries()[0].days_until, 4);
    Ok(())
}

#[test]
fn test_order_is_by_days_until_then_name() -> Result<()> {
    let book = book_with(&[
        ("Cid", Some("24.10.1990")),
        ("Ann", Some("24.10.1991")),
        ("Bob", Some("22.10.1992")),
        ("Zed", Some("26.10.1993")),
        ("Amy", Some("27.10.1994")),
        ("Kim", Some("28.10.1995")),
    ])?;

    let report = due_within(&book, monday(), BirthdayWindow::default());
    let names: Vec<&str> = report.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Ann", "Cid", "Zed", "Amy", "Kim"]);
    assert_eq!(report.names_on(Weekday::Thu), vec!["Ann", "Cid"]);
    assert_eq!(report.names_on(Weekday::Mon), vec!["Zed", "Amy", "Kim"]);
    Ok(())
}

#[test]
fn test_query_is_repeatable() -> Result<()> {
    let book = book_with(&[("Ann", Some("24.10.1990")), ("Bob", Some("26.10.1985"))])?;

    let first = due_within(&book, monday(), BirthdayWindow::default());
    let second = due_within(&book, monday(), BirthdayWindow::default());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_empty_and_birthdayless_books() -> Result<()> {
    let report = due_within(&AddressBook::new(), monday(), BirthdayWindow::default());
    assert!(report.is_empty());
    assert!(report.by_weekday().iter().all(|(_, names)| names.is_empty()));

    let book = book_with(&[("NoDate", None)])?;
    assert!(due_within(&book, monday(), BirthdayWindow::default()).is_empty());
    Ok(())
}

#[test]
fn test_passed_birthday_is_not_due() -> Result<()> {
    let book = book_with(&[("Yesterday", Some("20.10.1990"))])?;
    let report = due_within(&book, monday(), BirthdayWindow::new(30));
    assert!(report.is_empty());
    Ok(())
}
