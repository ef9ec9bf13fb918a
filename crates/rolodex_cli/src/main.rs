//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that verifies `rolodex_core` linkage.
//! - Run one find command over the sample book with deterministic output.

use rolodex_core::command::FindCommand;
use rolodex_core::{sample_address_book, Command, CoreConfig, KeywordsPredicate, Model, ModelManager};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("rolodex_core version={}", rolodex_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // First argument, when present, is a JSON config path.
    if let Some(path) = std::env::args().nth(1) {
        let config = CoreConfig::load(&path)?;
        if config.init_logging()? {
            log::info!("event=cli_start module=cli status=ok");
        }
    }

    let mut model = ModelManager::new(sample_address_book()?);
    let command = FindCommand::new(KeywordsPredicate::address(vec!["street".to_string()]));
    let result = command.execute(&mut model)?;

    println!("{} {}", command.command_word(), result.feedback_to_user);
    for person in model.filtered_person_list() {
        println!("  {}", person.name);
    }
    Ok(())
}
