use clap::{Args, Subcommand};

mod ensure_schema;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Create the enquiries table if it does not exist
    EnsureSchema(ensure_schema::EnsureSchemaArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::EnsureSchema(args) => ensure_schema::run(args).await,
    }
}
