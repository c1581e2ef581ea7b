use std::process::ExitCode;

use ii_app::RecentIngestStore;

use crate::render::render_recent;

pub async fn run(recent: &RecentIngestStore) -> anyhow::Result<ExitCode> {
    let entries = recent.list().await?;
    print!("{}", render_recent(&entries));
    Ok(ExitCode::SUCCESS)
}
