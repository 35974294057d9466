//! CSV codec for daily summaries.
//!
//! Provides the spreadsheet-compatible data exchange surface: writing the
//! full account as a `;`-delimited CSV document and reading such a document
//! (or a hand-edited cousin of one) back into the event store.
//!
//! ## Export Format
//!
//! - UTF-8 with a leading BOM so spreadsheet applications detect the
//!   encoding
//! - `;` field delimiter, CRLF row terminator
//! - One row per recorded date, newest first
//! - Durations as `H:MM`, the balance signed (`+H:MM` / `-H:MM`)
//! - `-` for figures that cannot be computed (missing endpoint, overnight
//!   span)
//!
//! ## Import Tolerances
//!
//! Import is forgiving about provenance: the delimiter is detected per line
//! across `;`, `,` and tab, dates may be `YYYY-MM-DD`, `DD.MM.YYYY` or
//! `DD/MM/YYYY`, clock times `H:MM` or `HH:MM`, and `-` or empty cells mean
//! absent. Rows whose date cannot be parsed are skipped. A truthy Holiday
//! cell turns the row into a holiday marking and its clock cells are
//! ignored.

use crate::libs::duration::compute_duration;
use crate::libs::event::EventKind;
use crate::libs::formatter::{format_balance, format_clock, format_minutes, parse_clock, parse_date};
use crate::libs::standards::Standards;
use crate::libs::summary::{aggregate_daily, DailySummary};
use crate::store::breaks::BreakTable;
use crate::store::events::{EventStore, EventStoreExt, UpsertAction};
use anyhow::Result;
use csv::{Terminator, WriterBuilder};
use tracing::debug;

/// Column order of the export header, also the contract for import indices.
pub const CSV_HEADER: &str = "Date;CheckIn;CheckOut;GrossDuration;NetDuration;Balance;Holiday;BreakCounted;BreakMinutes;BreakStart;BreakEnd";

const BOM: &str = "\u{feff}";

/// Typed failures of the CSV import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("the file contains no data rows")]
    Empty,
}

/// Counters reported by a completed import.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub updated: usize,
}

/// Outcome of an import attempt. Cancellation is not a failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    Cancelled,
    Done(ImportReport),
}

/// Renders daily summaries as a CSV document, newest first.
pub fn to_csv(summaries: &[DailySummary], standards: &Standards) -> Result<String> {
    let mut ordered: Vec<&DailySummary> = summaries.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER.split(';'))?;

    for day in ordered {
        let break_minutes = day.break_minutes.unwrap_or(standards.default_break_minutes) as i64;
        let totals = compute_duration(
            day.check_in,
            day.check_out,
            day.is_holiday,
            day.break_counted,
            break_minutes,
            standards.daily_work_minutes as i64,
        );

        let (gross, net, balance) = if totals.gross_minutes > 0 {
            // A break longer than the span clamps net to zero but the day
            // still renders as recorded, with the full target as deficit.
            let net = if totals.net_minutes > 0 {
                format_minutes(totals.net_minutes)
            } else {
                "0:00".to_string()
            };
            (format_minutes(totals.gross_minutes), net, format_balance(totals.overtime_minutes))
        } else {
            ("-".to_string(), "-".to_string(), "-".to_string())
        };

        writer.write_record([
            day.date.format("%Y-%m-%d").to_string(),
            day.check_in.map(format_clock).unwrap_or_else(|| "-".to_string()),
            day.check_out.map(format_clock).unwrap_or_else(|| "-".to_string()),
            gross,
            net,
            balance,
            if day.is_holiday { "1" } else { "0" }.to_string(),
            if day.break_counted { "1" } else { "0" }.to_string(),
            break_minutes.to_string(),
            day.break_start.map(format_clock).unwrap_or_else(|| "-".to_string()),
            day.break_end.map(format_clock).unwrap_or_else(|| "-".to_string()),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("csv flush failed: {e}"))?;
    Ok(format!("{}{}", BOM, String::from_utf8(bytes)?))
}

/// Exports the whole account; `Ok(None)` when there is nothing to export.
pub fn export_csv(store: &impl EventStore, breaks: &impl BreakTable, standards: &Standards) -> Result<Option<String>> {
    let events = store.read_all()?;
    if events.is_empty() {
        return Ok(None);
    }
    let days: Vec<DailySummary> = aggregate_daily(&events, breaks).into_values().collect();
    Ok(Some(to_csv(&days, standards)?))
}

/// Imports a CSV document into the event store.
///
/// `None` contents means the user cancelled the file selection, a distinct
/// non-error outcome. Rows upsert check-in/check-out by (date, kind); a
/// truthy Holiday cell marks the date as a holiday instead. Break columns
/// update the side-table independently of the event counters.
pub fn import_csv(contents: Option<&str>, store: &impl EventStore, breaks: &impl BreakTable) -> Result<ImportOutcome> {
    let Some(contents) = contents else {
        return Ok(ImportOutcome::Cancelled);
    };

    let contents = contents.strip_prefix(BOM).unwrap_or(contents);
    let lines: Vec<&str> = contents.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(ImportError::Empty.into());
    }

    let mut report = ImportReport::default();
    for line in &lines[1..] {
        let fields: Vec<&str> = line
            .split(|c: char| c == ';' || c == ',' || c == '\t')
            .map(str::trim)
            .collect();
        if fields.len() < 2 {
            continue;
        }
        let Some(date) = parse_date(fields[0]) else {
            debug!(row = %line, "skipping row with unparseable date");
            continue;
        };

        if fields.get(6).is_some_and(|cell| is_truthy(cell)) {
            store.mark_holiday(date)?;
            report.imported += 1;
        } else {
            for (index, kind) in [(1, EventKind::CheckIn), (2, EventKind::CheckOut)] {
                let Some(time) = fields.get(index).and_then(|cell| parse_clock(cell)) else {
                    continue;
                };
                match store.upsert_by_date_kind(date, kind, time)? {
                    UpsertAction::Added => report.imported += 1,
                    UpsertAction::Updated => report.updated += 1,
                    UpsertAction::Unchanged => {}
                }
            }
        }

        if let Some(cell) = fields.get(7).filter(|cell| !cell.is_empty() && **cell != "-") {
            breaks.set_break_counted(date, is_truthy(cell));
        }
        if let Some(minutes) = fields.get(8).and_then(|cell| cell.parse::<u32>().ok()) {
            breaks.set_break_minutes(date, minutes);
        }
    }

    Ok(ImportOutcome::Done(report))
}

fn is_truthy(cell: &str) -> bool {
    cell == "1" || cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("yes")
}
