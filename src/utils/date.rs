//! Date formatting for frontmatter and sitemap entries.
//!
//! Every date the crate emits uses the `YYYY/MM/DD` form in local time.

use crate::log;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, TimeDelta};
use std::{fs, path::Path, time::SystemTime};

/// `YYYY/MM/DD`
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Format a filesystem timestamp in local time.
#[inline]
pub fn format_system_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(DATE_FORMAT).to_string()
}

#[inline]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date, used for the sitemap home entry.
#[inline]
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Creation (birth) date of a file.
///
/// Platforms or filesystems without birth time fall back to the modification
/// time; a missing file falls back to today. Both fallbacks are logged.
pub fn file_created(path: &Path) -> String {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            log!("error"; "cannot stat {}: {err}, using today", path.display());
            return today();
        }
    };

    match metadata.created().or_else(|_| metadata.modified()) {
        Ok(time) => format_system_time(time),
        Err(err) => {
            log!("error"; "no timestamps for {}: {err}, using today", path.display());
            today()
        }
    }
}

/// Last modification date of a file.
pub fn file_modified(path: &Path) -> Result<String> {
    let modified = fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .with_context(|| format!("Failed to read mtime of {}", path.display()))?;
    Ok(format_system_time(modified))
}

/// `start` minus `weeks` weeks, counted as `round(weeks * 7)` whole days.
///
/// Returns `None` when the result leaves chrono's date range.
pub fn weeks_before(start: NaiveDate, weeks: f64) -> Option<NaiveDate> {
    let days = (weeks * 7.0).round();
    if !days.is_finite() {
        return None;
    }
    start.checked_sub_signed(TimeDelta::try_days(days as i64)?)
}
