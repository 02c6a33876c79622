//! Config command handler for rolodex
//!
//! Handles config-related commands such as set and show.

use super::{CommandArgs, CommandHandler};
use crate::address_book::AddressBook;
use crate::config::Config;
use anyhow::Result;

#[derive(Debug)]
pub struct ConfigHandler;

impl CommandHandler for ConfigHandler {
    fn execute(&self, args: CommandArgs, _book: &mut AddressBook) -> Result<()> {
        match args.args.first().map(|s| s.as_str()) {
            Some("show") | Some("get") | Some("list") => show_config(&args),
            Some("set") => set_config(&args),
            _ => {
                println!("Unknown config command. Available commands: show, set");
                Ok(())
            }
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "config"
    }
}

fn show_config(args: &CommandArgs) -> Result<()> {
    let config = Config::load()?;
    match args.args.get(1).map(|s| s.as_str()) {
        None | Some("all") => {
            println!("contacts.sort_on_load = {}", config.contacts.sort_on_load);
            println!(
                "interface.prompt = {}",
                config.interface.prompt.as_deref().unwrap_or("(default)")
            );
        }
        Some("contacts.sort_on_load") => {
            println!("{}", config.contacts.sort_on_load);
        }
        Some("interface.prompt") => {
            println!("{}", config.interface.prompt.as_deref().unwrap_or("(default)"));
        }
        Some(other) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn set_config(args: &CommandArgs) -> Result<()> {
    let (key, value) = match (args.args.get(1), args.args.get(2)) {
        (Some(key), Some(value)) => (key.as_str(), value.as_str()),
        _ => {
            println!("Usage: config set <key> <value>");
            return Ok(());
        }
    };

    let mut config = Config::load()?;
    match key {
        "contacts.sort_on_load" => match value.parse::<bool>() {
            Ok(flag) => config.contacts.sort_on_load = flag,
            Err(_) => {
                println!("Value for {} must be 'true' or 'false'", key);
                return Ok(());
            }
        },
        "interface.prompt" => {
            config.interface.prompt = Some(value.to_string());
        }
        other => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    }
    config.save()?;
    println!("Configuration updated: {} = {}", key, value);
    Ok(())
}
