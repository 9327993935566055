use clap::Args;
use eyegic_app::{
    database::{self, DatabaseConfig, Db},
    domain::enquiries::{EnquiriesService, PgEnquiriesService},
};

use super::summary_line;

#[derive(Debug, Args)]
pub(crate) struct ListEnquiriesArgs {
    #[command(flatten)]
    database: DatabaseConfig,
}

pub(crate) async fn run(args: ListEnquiriesArgs) -> Result<(), String> {
    let db = database::connect(&args.database)
        .await
        .map(Db::new)
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let enquiries = PgEnquiriesService::new(&db)
        .list_enquiries()
        .await
        .map_err(|error| format!("failed to list enquiries: {error}"))?;

    db.close().await;

    for enquiry in &enquiries {
        println!("{}", summary_line(enquiry));
    }

    println!("{} enquiries", enquiries.len());

    Ok(())
}
