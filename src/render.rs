//! Plain-text rendering of the view models.

use std::fmt::Write;

use ii_app::IngestInspection;
use ii_core::timeline::{DisplayEvent, LOG_LINK_TEXT};
use ii_core::{IngestViewModel, LookupFailureView, RecentIngestEntry};

const LABEL_WIDTH: usize = 21;

pub fn render_inspection(inspection: &IngestInspection) -> String {
    match inspection {
        IngestInspection::Found(view) => render_ingest(view),
        IngestInspection::Failed(failure) => render_failure(failure),
    }
}

pub fn render_ingest(view: &IngestViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found ingest in the {} API:", view.environment);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", view.id, view.status);

    if let Some(source) = &view.source {
        field(&mut out, "source location", &source.display);
        continuation(&mut out, &source.href);
    }
    field(&mut out, "storage space", view.space.as_str());
    field(&mut out, "external identifier", &view.external_identifier);
    field(&mut out, "version", &view.version.to_string());

    if let Some(locations) = &view.bag_locations {
        field(&mut out, "bag locations", &locations.primary.uri);
        continuation(&mut out, &locations.glacier.uri);
    }

    field(&mut out, "created date", &view.created_display);
    field(&mut out, "last update", &view.last_updated_display);

    if let Some(callback) = &view.callback {
        field(&mut out, "callback status", &callback.label);
    }

    let _ = writeln!(out, "  events:");
    for event in &view.events {
        render_event(&mut out, event);
    }
    out
}

fn render_event(out: &mut String, event: &DisplayEvent) {
    let marker = if event.failed { '!' } else { '-' };
    let _ = write!(out, "    {marker} {}", event.description);
    if let Some(footnote) = event.footnote() {
        let _ = write!(out, " {footnote}");
    }
    let _ = writeln!(out);
    if let Some(url) = &event.log_link {
        let _ = writeln!(out, "        {LOG_LINK_TEXT}: {url}");
    }
}

pub fn render_failure(failure: &LookupFailureView) -> String {
    format!(
        "{}\n\nCheck the ingests API logs for more detail:\n{}\n",
        failure.message, failure.logs_url
    )
}

pub fn render_recent(entries: &[RecentIngestEntry]) -> String {
    if entries.is_empty() {
        return "No recently viewed ingests.\n".to_string();
    }

    let mut out = String::from("Recently viewed ingests:\n");
    for entry in entries {
        let _ = writeln!(
            out,
            "  {} – {}/{}",
            entry.ingest_id, entry.space, entry.external_identifier
        );
    }
    out
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<LABEL_WIDTH$} {value}", format!("{label}:"));
}

fn continuation(out: &mut String, value: &str) {
    let _ = writeln!(out, "  {:<LABEL_WIDTH$} {value}", "");
}
