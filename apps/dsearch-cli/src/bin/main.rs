//! Interactive shell: menu, field capture, search, page printing.
//!
//! All search behaviour lives in dsearch-core / dsearch-display; this loop
//! only reads lines, dispatches and prints.

use std::io::{self, BufRead};

use dsearch_core::config::Config;
use dsearch_core::{Dataset, RecordCollection, Role};
use dsearch_display::{colour, format_page};

fn main() -> anyhow::Result<()> {
    let dataset = match load_dataset() {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Unable to initialise the application : {e}");
            std::process::exit(1);
        }
    };

    println!("Welcome to the data search application");
    println!("======================================");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("to start searching please enter ");
        println!("1 for User search");
        println!("2 for Organisation search");
        println!("3 for Ticket search");
        println!("or 'quit' anytime to exit the program");
        println!("Enter your choice : ");

        let Some(choice) = next_line(&mut lines)? else {
            break;
        };
        let role = match choice.as_str() {
            "1" => Role::User,
            "2" => Role::Organisation,
            "3" => Role::Ticket,
            "quit" => break,
            _ => {
                println!("{}Invalid choice. Read the options carefully...{}", colour::RED, colour::RESET);
                println!();
                continue;
            }
        };

        if run_search(&dataset, role, &mut lines)?.is_none() {
            break;
        }
    }

    println!("Exiting...");
    Ok(())
}

/// One capture-and-search round. `Ok(None)` means the user asked to quit.
fn run_search(
    dataset: &Dataset,
    role: Role,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<()>> {
    let collection = dataset.collection(role);

    println!("please enter one of the field to search following list ");
    print!("{}{}{}", colour::GREEN, collection.field_listing(), colour::RESET);
    println!("Enter your choice : ");

    let field = loop {
        let Some(field) = next_line(lines)? else {
            return Ok(None);
        };
        if field == "quit" {
            return Ok(None);
        }
        if collection.has_field(&field) {
            break field;
        }
        println!("{}Invalid Key please try again : {}", colour::RED, colour::RESET);
    };

    println!("please enter the value searching for or if empty type [] : ");
    let Some(value) = next_line(lines)? else {
        return Ok(None);
    };
    let value = if value == "[]" { String::new() } else { value };

    match dataset.search(role, &field, &value) {
        Ok(pages) => {
            for page in &pages {
                println!("{}", format_page(page)?);
            }
        }
        Err(e) => {
            println!("{}{e}{}", colour::RED, colour::RESET);
            println!();
        }
    }
    Ok(Some(()))
}

fn load_dataset() -> anyhow::Result<Dataset> {
    let config = Config::load()?;
    let paths = config.data_paths(&std::env::current_dir()?);
    Ok(Dataset {
        users: RecordCollection::from_path(&paths.users)?,
        organisations: RecordCollection::from_path(&paths.organisations)?,
        tickets: RecordCollection::from_path(&paths.tickets)?,
    })
}

/// Next trimmed input line; `None` on end of input.
fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
