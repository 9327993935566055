use clap::Args;
use eyegic_app::database::{self, DatabaseConfig};

#[derive(Debug, Args)]
pub(crate) struct EnsureSchemaArgs {
    #[command(flatten)]
    database: DatabaseConfig,
}

pub(crate) async fn run(args: EnsureSchemaArgs) -> Result<(), String> {
    let pool = database::connect(&args.database)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::ensure_schema(&pool)
        .await
        .map_err(|error| format!("failed to ensure schema: {error}"))?;

    pool.close().await;

    println!("enquiries table is present");

    Ok(())
}
