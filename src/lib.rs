pub mod address_book;
pub mod app;
pub mod cli;
pub mod command_processor;
pub mod config;
pub mod contact;
pub mod search;
pub mod state;
pub mod validation;

use anyhow::Result;
use log::info;

pub fn run() -> Result<()> {
    let mut app = app::Application::new()?;
    info!("Initializing rolodex application");
    app.run()
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use address_book::AddressBook;
pub use config::Config;
pub use contact::{Appointment, Birthday, Contact};
