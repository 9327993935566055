use clap::Args;
use eyegic_app::{
    database::{self, DatabaseConfig, Db},
    domain::enquiries::{
        EnquiriesService, EnquiriesServiceError, PgEnquiriesService, records::EnquiryId,
    },
};

use super::summary_line;

#[derive(Debug, Args)]
pub(crate) struct DeleteEnquiryArgs {
    /// Id of the enquiry to delete
    #[arg(long)]
    id: i32,

    #[command(flatten)]
    database: DatabaseConfig,
}

pub(crate) async fn run(args: DeleteEnquiryArgs) -> Result<(), String> {
    let db = database::connect(&args.database)
        .await
        .map(Db::new)
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let result = PgEnquiriesService::new(&db)
        .delete_enquiry(EnquiryId::from_raw(args.id))
        .await;

    db.close().await;

    let enquiry = result.map_err(|error| match error {
        EnquiriesServiceError::NotFound => format!("enquiry {} not found", args.id),
        error => format!("failed to delete enquiry: {error}"),
    })?;

    println!("deleted: {}", summary_line(&enquiry));

    Ok(())
}
