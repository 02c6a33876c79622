//! Exit command handler for rolodex
//!
//! Handles exit and quit commands.

use super::{CommandArgs, CommandHandler};
use crate::address_book::AddressBook;
use anyhow::Result;

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(&self, _args: CommandArgs, _book: &mut AddressBook) -> Result<()> {
        println!("Exiting rolodex...");
        std::process::exit(0);
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "exit" || command == "quit"
    }
}
