use crate::libs::formatter::minutes_since_midnight;
use crate::libs::standards::Standards;
use crate::libs::week::WeekBucket;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Worked-versus-target balance for one calendar month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub worked_minutes: i64,
    pub target_minutes: i64,
    pub day_count: u32,
    pub evening_minutes: i64,
    pub balance_minutes: i64,
}

/// Rolls week slots up into monthly balances, newest first.
///
/// Only slots strictly before `today` are considered. The target accrues for
/// every considered working weekday whether or not anything was recorded, so
/// the balance goes negative for unrecorded past days. Evening minutes count
/// the portion of any recorded check-out past the evening threshold.
pub fn build_months(weeks: &[WeekBucket], standards: &Standards, today: NaiveDate) -> Vec<MonthBucket> {
    let mut months: BTreeMap<(i32, u32), MonthBucket> = BTreeMap::new();

    for week in weeks {
        for slot in &week.days {
            if slot.date >= today {
                continue;
            }
            let bucket = months
                .entry((slot.date.year(), slot.date.month()))
                .or_insert_with(|| MonthBucket {
                    year: slot.date.year(),
                    month: slot.date.month(),
                    worked_minutes: 0,
                    target_minutes: 0,
                    day_count: 0,
                    evening_minutes: 0,
                    balance_minutes: 0,
                });

            if standards.is_working_weekday(slot.weekday) {
                bucket.target_minutes += standards.daily_work_minutes as i64;
            }
            bucket.day_count += 1;
            if slot.net_minutes > 0 {
                bucket.worked_minutes += slot.net_minutes;
            }
            if let Some(check_out) = slot.check_out {
                let past = minutes_since_midnight(check_out) - standards.evening_threshold_minutes as i64;
                if past > 0 {
                    bucket.evening_minutes += past;
                }
            }
        }
    }

    for bucket in months.values_mut() {
        bucket.balance_minutes = bucket.worked_minutes - bucket.target_minutes;
    }

    let mut ordered: Vec<MonthBucket> = months.into_values().collect();
    ordered.reverse();
    ordered
}
