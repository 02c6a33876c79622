//! Help command handler for rolodex
//!
//! Handles help-related commands.

use super::{CommandArgs, CommandHandler};
use crate::address_book::AddressBook;
use anyhow::Result;

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute(&self, _args: CommandArgs, _book: &mut AddressBook) -> Result<()> {
        print_help();
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "help" || command == "--help" || command == "-h"
    }
}

fn print_help() {
    println!("rolodex - A terminal tool for managing contacts, birthdays and appointments");
    println!();
    println!("USAGE:");
    println!("  rolodex [COMMAND] [SUBCOMMAND] [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("  contact   Manage contacts (add, list, show, delete)");
    println!("  search    Search contacts by birthday (b/) or appointment (a/)");
    println!("  config    Manage configuration");
    println!("  help      Show this help message");
    println!("  version   Show version information");
    println!("  exit      Exit the application");
    println!();
    println!("EXAMPLES:");
    println!("  rolodex contact add \"Alice Chen\" --appointment \"2023-12-31 14:30\"");
    println!("  rolodex search a/2023-12-31 14:30");
    println!("  rolodex search b/1990-01-01");
    println!("  rolodex config set interface.prompt \">> \"");
}
