pub mod handlers;

use std::io::{self, Write};
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::error::BookResult;
use crate::model::AddressBook;
use crate::store;

/// Run the interactive REPL against the snapshot at `data_path`.
pub fn run(data_path: &Path) {
    let mut book = store::load(data_path);
    println!("Welcome to the assistant bot!");

    loop {
        let input = match read_line("Enter a command: ") {
            Some(line) => line,
            // EOF behaves like exit: save and leave.
            None => {
                persist(&book, data_path);
                println!("Good bye!");
                break;
            }
        };

        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            continue;
        };
        let command = command.to_ascii_lowercase();

        match command.as_str() {
            "close" | "exit" | "quit" => {
                persist(&book, data_path);
                println!("Good bye!");
                break;
            }
            "hello" => println!("How can I help you?"),
            "help" | "?" => print_help(),

            "add" => {
                report(handlers::add(args, &mut book));
                persist(&book, data_path);
            }
            "change" => {
                report(handlers::change(args, &mut book));
                persist(&book, data_path);
            }
            "phone" => report(handlers::phone(args, &book)),
            "all" => report(handlers::all(&book)),
            "add-birthday" => {
                report(handlers::add_birthday(args, &mut book));
                persist(&book, data_path);
            }
            "show-birthday" => report(handlers::show_birthday(args, &book)),
            "birthdays" => report(handlers::birthdays(args, &book, today())),

            _ => println!("Invalid command."),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Prompt and read one line from stdin. Returns None on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim().to_string()),
        Err(_) => None,
    }
}

/// Success and failure both render as plain lines; no handler error ends
/// the session.
fn report(result: BookResult<String>) {
    match result {
        Ok(message) => println!("{}", message),
        Err(e) => println!("{}", e),
    }
}

/// Write the book back after a mutating command. Save failures are
/// surfaced rather than swallowed.
fn persist(book: &AddressBook, path: &Path) {
    if let Err(e) = store::save(book, path) {
        eprintln!("Error saving address book: {}", e);
    }
}

fn print_help() {
    println!(
        r#"
COMMANDS:
  add <name> <phone>           Add a contact, or append a phone to one
  change <name> <old> <new>    Replace a contact's phone number
  phone <name>                 List a contact's phones
  all                          Show every contact
  add-birthday <name> <date>   Set a birthday (DD.MM.YYYY)
  show-birthday <name>         Show a contact's birthday
  birthdays [days]             Upcoming birthdays (default window: 7 days)
  hello                        Say hello
  help                         Show this help
  exit / close / quit          Save and exit"#
    );
}
