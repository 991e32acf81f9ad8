//! One-shot query: run a single field/value search and print the pages.

use std::env;

use dsearch_core::config::Config;
use dsearch_core::{Dataset, RecordCollection, Role};
use dsearch_display::{colour, format_page};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <users|organisations|tickets> <field> <value>", args[0]);
        eprintln!("Example: {} users name 'jon'", args[0]);
        eprintln!("Use [] as the value to search for empty/missing fields");
        std::process::exit(1);
    }

    let role = match args[1].as_str() {
        "users" => Role::User,
        "organisations" | "orgs" => Role::Organisation,
        "tickets" => Role::Ticket,
        other => {
            eprintln!("Unknown collection: {other}");
            std::process::exit(1);
        }
    };
    let field = &args[2];
    let value = if args[3] == "[]" { "" } else { args[3].as_str() };

    let config = Config::load()?;
    let paths = config.data_paths(&env::current_dir()?);
    let dataset = Dataset {
        users: RecordCollection::from_path(&paths.users)?,
        organisations: RecordCollection::from_path(&paths.organisations)?,
        tickets: RecordCollection::from_path(&paths.tickets)?,
    };

    match dataset.search(role, field, value) {
        Ok(pages) => {
            for page in &pages {
                println!("{}", format_page(page)?);
            }
        }
        Err(e) => {
            eprintln!("{}{e}{}", colour::RED, colour::RESET);
            std::process::exit(1);
        }
    }
    Ok(())
}
