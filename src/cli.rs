use clap::{Parser, Subcommand};
use std::collections::HashMap;

use crate::command_processor::CommandArgs;

/// rolodex - terminal contact management with birthday and appointment search
#[derive(Debug, Parser)]
#[command(name = "rolodex")]
#[command(about = "A terminal-based contact management tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, enters interactive mode)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage contacts
    #[command(alias = "contacts")]
    Contact {
        #[command(subcommand)]
        action: ContactActions,
    },

    /// Search contacts by birthday (b/) or appointment (a/)
    Search {
        /// Search argument, e.g. "a/2023-12-31 14:30" or "b/1990-01-01"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ContactActions {
    /// Add a new contact
    #[command(alias = "create")]
    Add {
        /// Contact name
        #[arg(required = true)]
        name: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Birthday (YYYY-MM-DD)
        #[arg(long)]
        birthday: Option<String>,

        /// Appointment (YYYY-MM-DD HH:MM)
        #[arg(long)]
        appointment: Option<String>,
    },

    /// List contacts in the current view
    List,

    /// Show a contact's details
    Show {
        /// Contact name
        #[arg(required = true)]
        name: String,
    },

    /// Delete a contact
    #[command(alias = "remove")]
    Delete {
        /// Contact name
        #[arg(required = true)]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show configuration
    #[command(aliases = ["list", "get"])]
    Show {
        /// Key to show (use "all" for all settings)
        key: Option<String>,
    },

    /// Set configuration value
    Set {
        /// Configuration key
        #[arg(required = true)]
        key: String,

        /// Configuration value
        #[arg(required = true)]
        value: String,
    },
}

/// Convert a Clap command to a CommandArgs representation
pub fn convert_to_command_args(cli: &Cli) -> Option<CommandArgs> {
    // If no command specified, return None to enter interactive mode
    let command = cli.command.as_ref()?;

    let mut args = Vec::new();
    let mut flags = HashMap::new();

    let command_str = match command {
        Commands::Contact { action } => {
            match action {
                ContactActions::Add { name, phone, email, birthday, appointment } => {
                    args.push("add".to_string());
                    args.push(name.clone());
                    if let Some(phone) = phone {
                        flags.insert("phone".to_string(), Some(phone.clone()));
                    }
                    if let Some(email) = email {
                        flags.insert("email".to_string(), Some(email.clone()));
                    }
                    if let Some(birthday) = birthday {
                        flags.insert("birthday".to_string(), Some(birthday.clone()));
                    }
                    if let Some(appointment) = appointment {
                        flags.insert("appointment".to_string(), Some(appointment.clone()));
                    }
                }
                ContactActions::List => {
                    args.push("list".to_string());
                }
                ContactActions::Show { name } => {
                    args.push("show".to_string());
                    args.push(name.clone());
                }
                ContactActions::Delete { name } => {
                    args.push("delete".to_string());
                    args.push(name.clone());
                }
            }
            "contact".to_string()
        }
        Commands::Search { query } => {
            args.extend(query.iter().cloned());
            "search".to_string()
        }
        Commands::Config { action } => {
            match action {
                ConfigActions::Show { key } => {
                    args.push("show".to_string());
                    if let Some(key) = key {
                        args.push(key.clone());
                    }
                }
                ConfigActions::Set { key, value } => {
                    args.push("set".to_string());
                    args.push(key.clone());
                    args.push(value.clone());
                }
            }
            "config".to_string()
        }
    };

    Some(CommandArgs { command: command_str, args, flags })
}
