use std::process::ExitCode;

use anyhow::Context;
use ii_app::{IngestInspection, InspectIngest};
use tracing::{info_span, Instrument};

use crate::cli::LookupArgs;
use crate::render::render_inspection;

/// Prints the inspection; a failed lookup exits non-zero.
pub async fn run(inspect: &InspectIngest, args: &LookupArgs) -> anyhow::Result<ExitCode> {
    let span = info_span!("command.lookup", ingest_id = %args.ingest_id, env = %args.environment);

    async {
        let inspection = inspect.execute(&args.ingest_id, args.environment).await;

        let output = if args.json {
            let mut json = serde_json::to_string_pretty(&inspection)
                .context("Failed to serialize inspection")?;
            json.push('\n');
            json
        } else {
            render_inspection(&inspection)
        };
        print!("{output}");

        Ok(match inspection {
            IngestInspection::Found(_) => ExitCode::SUCCESS,
            IngestInspection::Failed(_) => ExitCode::FAILURE,
        })
    }
    .instrument(span)
    .await
}
