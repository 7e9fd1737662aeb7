//! Statistics reporting.

use console::style;

use crate::download::{RunSummary, SkipReason};

/// Print the end-of-run statistics block.
pub fn print_run_stats(summary: &RunSummary) {
    let state = &summary.state;

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Statistics:").bold());
    println!("  Pages fetched: {}", state.pages_fetched);
    println!("  Files seen:    {}", state.files_seen);
    println!(
        "  Downloaded:    {} ({})",
        style(state.downloaded).green(),
        format_bytes(state.bytes_written)
    );
    println!(
        "  Skipped:       {} (no channel: {}, no download URL: {}, existing: {})",
        style(state.skipped_total()).yellow(),
        state.skipped_for(SkipReason::NoDestination),
        state.skipped_for(SkipReason::NoDownloadUrl),
        state.skipped_for(SkipReason::AlreadyExists)
    );
    if state.failed > 0 {
        println!(
            "  Failed:        {} ({})",
            style(state.failed).red(),
            state.failed_ids.join(", ")
        );
    }
    println!(
        "  Cursor:        {} -> {}{}",
        format_cursor(summary.previous_cursor),
        format_cursor(summary.next_cursor.or(summary.previous_cursor)),
        if summary.next_cursor.is_some() && !summary.cursor_saved {
            " (not saved)"
        } else {
            ""
        }
    );
    println!("{}", style("═".repeat(50)).dim());
}

fn format_cursor(cursor: Option<i64>) -> String {
    cursor.map_or_else(|| "none".to_string(), |ts| ts.to_string())
}

/// Render a byte count with a binary unit.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
