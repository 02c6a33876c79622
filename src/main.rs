use anyhow::Result;
use clap::Parser;
use log::info;

use rolodex::app::Application;
use rolodex::cli::{self, Cli};

fn main() -> Result<()> {
    rolodex::init_logger();

    let cli = Cli::parse();
    let mut app = Application::new()?;

    match cli::convert_to_command_args(&cli) {
        Some(args) => {
            info!("Executing one-shot command: {}", args.command);
            app.execute(args)
        }
        None => app.run(),
    }
}
