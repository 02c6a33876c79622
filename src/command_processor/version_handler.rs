//! Version command handler for rolodex
//!
//! Handles version-related commands.

use super::{CommandArgs, CommandHandler};
use crate::address_book::AddressBook;
use anyhow::Result;

#[derive(Debug)]
pub struct VersionHandler;

impl CommandHandler for VersionHandler {
    fn execute(&self, _args: CommandArgs, _book: &mut AddressBook) -> Result<()> {
        const VERSION: &str = env!("CARGO_PKG_VERSION");
        println!("rolodex v{}", VERSION);
        println!("A terminal tool for managing contacts, birthdays and appointments.");
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "version" || command == "--version" || command == "-v"
    }
}
