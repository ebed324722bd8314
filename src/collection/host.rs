//! Read-only host introspection, independent of the pipe data.
//!
//! Both queries swallow every failure and map it to a fallback value
//! (`"unknown"` or 0); nothing here ever reaches the render loop as an
//! error.

use std::path::Path;

/// Exposes elapsed seconds since boot as its first whitespace-delimited
/// token. On hosts without procfs the read fails and the fallback applies.
const UPTIME_PATH: &str = "/proc/uptime";

/// One numeric directory entry per live process.
const PROCESS_TABLE_PATH: &str = "/proc";

/// Returns host uptime as `"{hours}h {minutes}m {seconds}s"`, or
/// `"unknown"` if the source cannot be read or parsed.
pub fn uptime() -> String {
    uptime_from(Path::new(UPTIME_PATH))
}

pub(crate) fn uptime_from(path: &Path) -> String {
    match read_uptime_seconds(path) {
        Some(seconds) => format_uptime(seconds),
        None => "unknown".to_owned(),
    }
}

fn read_uptime_seconds(path: &Path) -> Option<u64> {
    let contents = std::fs::read_to_string(path).ok()?;
    let seconds: f64 = contents.split_whitespace().next()?.parse().ok()?;

    (seconds >= 0.0).then_some(seconds as u64)
}

fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours}h {minutes}m {seconds}s")
}

/// Counts live processes by their numeric entries in the process table.
/// Returns 0 if the table cannot be read.
pub fn total_process_count() -> usize {
    total_process_count_in(Path::new(PROCESS_TABLE_PATH))
}

pub(crate) fn total_process_count_in(table: &Path) -> usize {
    match std::fs::read_dir(table) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()))
            })
            .count(),
        Err(_) => 0,
    }
}
