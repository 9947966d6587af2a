use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Record};
use crate::queries::birthday_queries;
use crate::validation;

const DEFAULT_WINDOW_DAYS: i64 = 7;

fn not_enough(command: &str) -> BookError {
    BookError::NotEnoughArguments {
        command: command.to_string(),
    }
}

/// `add <name> <phone>`: create-or-update the record, append the phone.
pub fn add(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let (name, phone) = match args {
        [name, phone, ..] => (*name, *phone),
        _ => return Err(not_enough("add")),
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".into())
        }
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            book.add(record);
            Ok("Contact added.".into())
        }
    }
}

/// `change <name> <old> <new>`: replace the first matching phone.
pub fn change(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let (name, old, new) = match args {
        [name, old, new, ..] => (*name, *old, *new),
        _ => return Err(not_enough("change")),
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::contact_not_found(name))?;
    record.edit_phone(old, new)?;
    Ok("Phone updated.".into())
}

/// `phone <name>`: list the contact's phones.
pub fn phone(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let name = match args {
        [name, ..] => *name,
        _ => return Err(not_enough("phone")),
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::contact_not_found(name))?;
    if record.phones().is_empty() {
        return Ok("No phones.".into());
    }
    Ok(record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; "))
}

/// `all`: render every record, one per line, in name order.
pub fn all(book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".into());
    }
    Ok(book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <date>`: create-or-update the record, set the
/// birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let (name, date) = match args {
        [name, date, ..] => (*name, *date),
        _ => return Err(not_enough("add-birthday")),
    };

    match book.find_mut(name) {
        Some(record) => record.set_birthday(date)?,
        None => {
            let mut record = Record::new(name)?;
            record.set_birthday(date)?;
            book.add(record);
        }
    }
    Ok("Birthday added.".into())
}

/// `show-birthday <name>`: render the contact's birthday.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let name = match args {
        [name, ..] => *name,
        _ => return Err(not_enough("show-birthday")),
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::contact_not_found(name))?;
    match record.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("No birthday set.".into()),
    }
}

/// `birthdays [days]`: upcoming birthdays grouped by congratulation date,
/// one line per date, dates ascending. The window defaults to 7 days.
pub fn birthdays(args: &[&str], book: &AddressBook, as_of: NaiveDate) -> BookResult<String> {
    let within_days = match args {
        [] => DEFAULT_WINDOW_DAYS,
        [days, ..] => {
            let parsed = days.parse::<i64>().map_err(|_| BookError::NotANumber {
                field: "days".into(),
            })?;
            validation::positive(parsed, "days")?
        }
    };

    let upcoming = birthday_queries::upcoming_birthdays(book, within_days, as_of);
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days.", within_days));
    }

    let mut by_date: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for entry in upcoming {
        by_date
            .entry(entry.congratulation_date)
            .or_default()
            .push(entry.name);
    }

    let lines: Vec<String> = by_date
        .into_iter()
        .map(|(date, names)| format!("{}: {}", date.format("%d.%m.%Y"), names.join(", ")))
        .collect();
    Ok(lines.join("\n"))
}
