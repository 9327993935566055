use clap::{Args, Subcommand};
use eyegic_app::domain::enquiries::records::EnquiryRecord;

mod delete;
mod list;

#[derive(Debug, Args)]
pub(crate) struct EnquiriesCommand {
    #[command(subcommand)]
    command: EnquiriesSubcommand,
}

#[derive(Debug, Subcommand)]
enum EnquiriesSubcommand {
    /// Print every enquiry, newest first
    List(list::ListEnquiriesArgs),

    /// Delete one enquiry and print it
    Delete(delete::DeleteEnquiryArgs),
}

pub(crate) async fn run(command: EnquiriesCommand) -> Result<(), String> {
    match command.command {
        EnquiriesSubcommand::List(args) => list::run(args).await,
        EnquiriesSubcommand::Delete(args) => delete::run(args).await,
    }
}

fn summary_line(enquiry: &EnquiryRecord) -> String {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        enquiry.id,
        enquiry.created_at,
        enquiry.name,
        optional(&enquiry.email),
        optional(&enquiry.phone),
        optional(&enquiry.product),
    )
}
