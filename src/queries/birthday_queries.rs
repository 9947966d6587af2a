use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::AddressBook;

/// A contact whose birthday falls inside the scan window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The next occurrence of the birthday, shifted off the weekend.
    pub congratulation_date: NaiveDate,
}

/// Finds contacts whose next birthday falls within `within_days` of
/// `as_of`, inclusive on both ends.
///
/// The congratulation date is the occurrence itself, moved to Monday when
/// it lands on a weekend (Saturday +2, Sunday +1). The shift is applied
/// after the window filter, so a shifted date may land past the window
/// end; such entries are still reported.
///
/// Results are sorted by congratulation date, ties broken by name.
pub fn upcoming_birthdays(
    book: &AddressBook,
    within_days: i64,
    as_of: NaiveDate,
) -> Vec<UpcomingBirthday> {
    let window_end = as_of + Duration::days(within_days);
    let mut results = Vec::new();

    for record in book.iter() {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let Some(mut next) = occurrence_in_year(birthday.date(), as_of.year()) else {
            continue;
        };
        if next < as_of {
            let Some(following) = occurrence_in_year(birthday.date(), as_of.year() + 1) else {
                continue;
            };
            next = following;
        }

        if next < as_of || next > window_end {
            continue;
        }

        results.push(UpcomingBirthday {
            name: record.name().to_string(),
            congratulation_date: shift_off_weekend(next),
        });
    }

    results.sort_by(|a, b| {
        (a.congratulation_date, a.name.as_str()).cmp(&(b.congratulation_date, b.name.as_str()))
    });
    results
}

/// The birthday's month/day applied to `year`. A Feb 29 birthday clamps
/// to Feb 28 when `year` is not a leap year.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
