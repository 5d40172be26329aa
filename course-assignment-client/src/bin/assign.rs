//! `assign participant-42 course-7`, or `not-assigned` as target to unassign.

use clap::Parser;
use course_assignment_client::telemetry::setup_logging;
use course_assignment_client::{ClientError, Dispatcher, HyperTransport};
use course_assignment_config::{config_sources, Config, ConfigError};
use course_assignment_frontend::drag::{DragAssign, DragEvent};
use course_assignment_frontend::page::{Page, Region};
use figment::providers::Serialized;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Assign a participant to a course")]
struct Args {
    /// Element id of the dragged participant, e.g. `participant-42`.
    participant: String,
    /// Element id of the drop target, e.g. `course-7` or `not-assigned`.
    target: String,
    /// Server url, overrides the configuration.
    #[arg(long)]
    url: Option<String>,
}

fn load_config(url: Option<&str>) -> Result<Config, ConfigError> {
    let mut sources = config_sources();
    if let Some(url) = url {
        sources = sources.merge(Serialized::default("url", url));
    }
    Ok(sources.extract()?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClientError> {
    setup_logging();
    let args = Args::parse();
    let config = load_config(args.url.as_deref())?;

    let handlers = DragAssign::from_config(&config);
    let mut page = Page::new();
    page.insert_region(args.participant.clone(), Region::default());
    page.insert_region(args.target.clone(), Region::default());

    let mut start = DragEvent::new(args.participant.clone());
    handlers.drag_start(&mut start);
    handlers.allow_drop(&mut page, &mut DragEvent::new(args.target.clone()));
    let mut drop = DragEvent::new(args.target).with_data_transfer(start.data_transfer);
    let request = handlers.drop(&mut page, &mut drop);

    info!(url = %config.url, values = ?request.values, "assigning");
    let dispatcher = Dispatcher::new(HyperTransport::new(&config.url)?);
    dispatcher.dispatch(&mut page, &request).await;

    if let Some(region) = page.region(&request.target) {
        println!("{}", region.markup());
    }
    Ok(())
}
