use crate::address_book::AddressBook;
use crate::command_processor::{CommandArgs, CommandProcessor};
use crate::config::Config;
use crate::state;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub struct Application {
    command_processor: CommandProcessor,
    address_book: AddressBook,
}

impl Application {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let mut contacts = state::load_contacts()?;
        if config.contacts.sort_on_load {
            contacts.sort_by(|a, b| a.name.cmp(&b.name));
        }
        log::info!("Loaded {} contact(s)", contacts.len());

        Ok(Self {
            command_processor: CommandProcessor::new(),
            address_book: AddressBook::from_contacts(contacts),
        })
    }

    /// Interactive terminal mode.
    pub fn run(&mut self) -> Result<()> {
        log::info!("Starting rolodex terminal");
        let config = Config::load()?;
        let prompt = config.interface.prompt.unwrap_or_else(|| "rolodex> ".to_string());

        let mut rl = DefaultEditor::new()?;
        println!("Welcome to rolodex! Type 'help' for commands.");

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());
                    if let Err(err) = self.process_input(&line) {
                        log::error!("Failed to process command: {:?}", err);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn process_input(&mut self, input: &str) -> Result<()> {
        let args = CommandArgs::parse(input)?;
        self.execute(args)
    }

    pub fn execute(&mut self, args: CommandArgs) -> Result<()> {
        self.command_processor.execute(args, &mut self.address_book)
    }
}
