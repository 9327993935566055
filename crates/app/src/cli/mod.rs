use clap::{Parser, Subcommand};

mod db;
mod enquiries;

#[derive(Debug, Parser)]
#[command(name = "eyegic-app", about = "Eyegic enquiries CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Enquiries(enquiries::EnquiriesCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Enquiries(command) => enquiries::run(command).await,
        }
    }
}
