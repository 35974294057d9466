//! Clock and duration formatting for reports and the CSV boundary.
//!
//! This module owns both directions of the string boundary: rendering minute
//! counts as `H:MM` durations and signed balances, and the tolerant parsing
//! of clock times and dates as they appear in imported spreadsheets.
//!
//! ## Format Specifications
//!
//! ### Duration Format
//! Durations follow the `H:MM` pattern:
//! - Hours are unpadded (a 100-hour month renders as `100:00`)
//! - Minutes are zero-padded to 2 digits
//! - Non-positive durations render as `-` (not computable / nothing worked)
//!
//! ### Balance Format
//! Balances are always signed: `+H:MM` or `-H:MM`, zero rendering as `+0:00`.
//!
//! ### Accepted Input Shapes
//! - Clock times: `H:MM` or `HH:MM`; `-` and empty mean absent
//! - Dates: `YYYY-MM-DD`, `DD.MM.YYYY` or `DD/MM/YYYY`
//!
//! ## Examples
//!
//! ```rust
//! use stempel::libs::formatter::{format_balance, format_minutes, parse_clock};
//!
//! assert_eq!(format_minutes(450), "7:30");
//! assert_eq!(format_minutes(0), "-");
//! assert_eq!(format_balance(-30), "-0:30");
//! assert_eq!(parse_clock("9:05"), chrono::NaiveTime::from_hms_opt(9, 5, 0));
//! assert_eq!(parse_clock("-"), None);
//! ```

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Date shapes accepted by the CSV importer, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Formats a minute count as `H:MM`, rendering non-positive counts as `-`.
pub fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return "-".to_string();
    }
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a signed minute balance as `+H:MM` or `-H:MM`.
pub fn format_balance(minutes: i64) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.abs();
    format!("{}{}:{:02}", sign, abs / 60, abs % 60)
}

/// Formats a clock time as `HH:MM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parses a `H:MM` / `HH:MM` clock string; `-` and empty are absent.
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() || value == "-" {
        return None;
    }
    let (hours, minutes) = value.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}

/// Parses a date in any of the accepted import shapes.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Minutes elapsed since midnight for a clock time.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}
