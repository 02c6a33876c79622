//! Search command handler for rolodex
//!
//! Routes `search b/<date>` and `search a/<date time>` to the matching
//! search command and applies it to the address book's filtered view.

use super::{CommandArgs, CommandHandler};
use crate::address_book::AddressBook;
use crate::search::parser;
use anyhow::Result;
use log::{debug, info};

#[derive(Debug)]
pub struct SearchHandler;

impl CommandHandler for SearchHandler {
    fn execute(&self, args: CommandArgs, book: &mut AddressBook) -> Result<()> {
        // The dispatcher wants the raw trailing text, not tokenized words:
        // an appointment argument spans a space ("2023-12-31 14:30").
        let raw = args.args.join(" ");
        debug!("search arguments: '{}'", raw);

        match parser::parse(&raw) {
            Ok(command) => {
                let result = command.execute(book);
                println!("{}", result.message());
                for contact in book.visible_contacts() {
                    println!("  - {}", contact);
                }
                info!("search matched {} contact(s)", book.visible_len());
            }
            Err(err) => {
                // User-input failure: report and carry on with the session.
                println!("{}", err);
            }
        }
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "search"
    }
}
