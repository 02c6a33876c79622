use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt::Debug;

pub mod config_handler;
pub mod contact_handler;
pub mod exit_handler;
pub mod help_handler;
pub mod search_handler;
pub mod version_handler;

use crate::address_book::AddressBook;

/// Command line arguments structure
#[derive(Debug, Clone)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
    pub flags: HashMap<String, Option<String>>,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>, flags: HashMap<String, Option<String>>) -> Self {
        Self { command, args, flags }
    }

    /// Parse a raw input line into a command word, positional arguments and
    /// `--flag [value]` pairs. Double quotes group words; the command word is
    /// lowercased while arguments keep their case (contact names matter).
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.replace('\u{a0}', " ");
        let normalized = normalized.trim();
        debug!("Normalized input: {}", normalized);

        let mut parts = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for c in normalized.chars() {
            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    if !in_quotes && !current.is_empty() {
                        parts.push(current.clone());
                        current.clear();
                    }
                }
                ' ' if !in_quotes => {
                    if !current.is_empty() {
                        parts.push(current.clone());
                        current.clear();
                    }
                }
                _ => current.push(c),
            }
        }
        if !current.is_empty() {
            parts.push(current);
        }

        if parts.is_empty() {
            return Err(anyhow!("No command provided"));
        }

        // A leading program name is tolerated so pasted shell lines work.
        if parts[0].eq_ignore_ascii_case("rolodex") {
            parts.remove(0);
            if parts.is_empty() {
                return Err(anyhow!("No command provided after 'rolodex'"));
            }
        }

        let command = parts.remove(0).to_lowercase();
        let mut args = Vec::new();
        let mut flags = HashMap::new();
        let mut i = 0;

        while i < parts.len() {
            if let Some(flag) = parts[i].strip_prefix("--") {
                if i + 1 < parts.len() && !parts[i + 1].starts_with("--") {
                    flags.insert(flag.to_string(), Some(parts[i + 1].clone()));
                    i += 1;
                } else {
                    flags.insert(flag.to_string(), None);
                }
            } else {
                args.push(parts[i].clone());
            }
            i += 1;
        }

        debug!("Parsed command: {:?}, args: {:?}, flags: {:?}", command, args, flags);
        Ok(CommandArgs { command, args, flags })
    }
}

pub trait CommandHandler: Debug {
    fn execute(&self, args: CommandArgs, book: &mut AddressBook) -> Result<()>;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(contact_handler::ContactHandler),
            Box::new(search_handler::SearchHandler),
            Box::new(config_handler::ConfigHandler),
            Box::new(version_handler::VersionHandler),
            Box::new(help_handler::HelpHandler),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    pub fn execute(&self, args: CommandArgs, book: &mut AddressBook) -> Result<()> {
        debug!("Attempting to execute command: {}", args.command);
        let command_name = args.command.clone();
        for handler in &self.handlers {
            if handler.can_handle(&command_name) {
                info!("Executing command '{}' with arguments: {:?}", command_name, args.args);
                match handler.execute(args, book) {
                    Ok(()) => {
                        debug!("Command '{}' executed successfully", command_name);
                        return Ok(());
                    }
                    Err(e) => {
                        log::error!("Failed to execute command '{}': {:?}", command_name, e);
                        return Err(e);
                    }
                }
            }
        }
        warn!("Unrecognized command: {}", command_name);
        println!("Unrecognized command. Type 'help' for a list of available commands.");
        Ok(())
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_command_args_and_flags() {
        let args = CommandArgs::parse("contact add \"Alice Chen\" --phone 555-0100").unwrap();
        assert_eq!(args.command, "contact");
        assert_eq!(args.args, vec!["add", "Alice Chen"]);
        assert_eq!(args.flags.get("phone"), Some(&Some("555-0100".to_string())));
    }

    #[test]
    fn parse_lowercases_the_command_word_only() {
        let args = CommandArgs::parse("Contact show \"Bob Marley\"").unwrap();
        assert_eq!(args.command, "contact");
        assert_eq!(args.args, vec!["show", "Bob Marley"]);
    }

    #[test]
    fn parse_strips_an_optional_program_name() {
        let args = CommandArgs::parse("rolodex search a/2023-12-31 14:30").unwrap();
        assert_eq!(args.command, "search");
        assert_eq!(args.args, vec!["a/2023-12-31", "14:30"]);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(CommandArgs::parse("").is_err());
        assert!(CommandArgs::parse("   ").is_err());
        assert!(CommandArgs::parse("rolodex").is_err());
    }

    #[test]
    fn flag_without_value_is_recorded_as_bare() {
        let args = CommandArgs::parse("contact list --verbose").unwrap();
        assert_eq!(args.flags.get("verbose"), Some(&None));
    }
}
