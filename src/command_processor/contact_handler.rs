//! Contact command handler for rolodex
//!
//! Handles contact-related commands such as add, list, show, and delete.

use super::{CommandArgs, CommandHandler};
use crate::address_book::AddressBook;
use crate::contact::Contact;
use crate::state;
use anyhow::Result;
use log::debug;

#[derive(Debug)]
pub struct ContactHandler;

impl CommandHandler for ContactHandler {
    fn execute(&self, args: CommandArgs, book: &mut AddressBook) -> Result<()> {
        match args.args.first().map(|s| s.as_str()) {
            Some("add") | Some("create") => add_contact(&args, book),
            Some("list") => {
                list_contacts(book);
                Ok(())
            }
            Some("show") => {
                show_contact(&args, book);
                Ok(())
            }
            Some("delete") | Some("remove") => delete_contact(&args, book),
            _ => {
                println!("Unknown contact command. Available commands: add, list, show, delete");
                Ok(())
            }
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "contact" || command == "contacts"
    }
}

fn add_contact(args: &CommandArgs, book: &mut AddressBook) -> Result<()> {
    let name = match args.args.get(1) {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => {
            println!("Usage: contact add \"<name>\" [--phone P] [--email E] [--birthday YYYY-MM-DD] [--appointment \"YYYY-MM-DD HH:MM\"]");
            return Ok(());
        }
    };

    if book.find(&name).is_some() {
        println!("Contact '{}' already exists", name);
        return Ok(());
    }

    let mut contact = Contact::new(name.clone());

    if let Some(Some(phone)) = args.flags.get("phone") {
        contact.phone = Some(phone.clone());
    }
    if let Some(Some(email)) = args.flags.get("email") {
        contact.email = Some(email.clone());
    }
    if let Some(Some(birthday)) = args.flags.get("birthday") {
        match birthday.parse() {
            Ok(parsed) => contact.birthday = Some(parsed),
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        }
    }
    if let Some(Some(appointment)) = args.flags.get("appointment") {
        match appointment.parse() {
            Ok(parsed) => contact.appointment = Some(parsed),
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        }
    }

    debug!("Adding contact: {:?}", contact);
    book.add(contact);
    state::save_contacts(book.contacts())?;
    println!("Contact '{}' added successfully", name);
    Ok(())
}

fn list_contacts(book: &AddressBook) {
    if book.visible_len() == 0 {
        println!("No contacts to show.");
        return;
    }
    for contact in book.visible_contacts() {
        println!("  - {}", contact);
    }
    println!("{} contact(s) listed", book.visible_len());
}

fn show_contact(args: &CommandArgs, book: &AddressBook) {
    let name = match args.args.get(1) {
        Some(name) => name,
        None => {
            println!("Usage: contact show \"<name>\"");
            return;
        }
    };
    match book.find(name) {
        Some(contact) => println!("{}", contact),
        None => println!("Contact '{}' not found", name),
    }
}

fn delete_contact(args: &CommandArgs, book: &mut AddressBook) -> Result<()> {
    let name = match args.args.get(1) {
        Some(name) => name.clone(),
        None => {
            println!("Usage: contact delete \"<name>\"");
            return Ok(());
        }
    };
    match book.remove(&name) {
        Some(_) => {
            state::save_contacts(book.contacts())?;
            println!("Contact '{}' removed successfully", name);
        }
        None => println!("Contact '{}' not found", name),
    }
    Ok(())
}
