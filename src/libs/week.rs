use crate::libs::duration::compute_duration;
use crate::libs::standards::Standards;
use crate::libs::summary::DailySummary;
use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use std::collections::BTreeMap;

/// One working-weekday slot inside a week bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekDaySlot {
    pub weekday: Weekday,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub net_minutes: i64,
    pub overtime_minutes: i64,
    pub is_holiday: bool,
    pub break_counted: bool,
}

/// A Monday-anchored week with one slot per configured working weekday.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub days: Vec<WeekDaySlot>,
    pub total_net_minutes: i64,
    pub total_overtime_minutes: i64,
    pub is_current_week: bool,
}

/// The Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_monday() as u64)
}

fn empty_bucket(week_start: NaiveDate, standards: &Standards, today: NaiveDate) -> WeekBucket {
    let days: Vec<WeekDaySlot> = standards
        .sorted_working_weekdays()
        .into_iter()
        .map(|weekday| WeekDaySlot {
            weekday,
            date: week_start + Days::new(weekday.num_days_from_monday() as u64),
            check_in: None,
            check_out: None,
            net_minutes: 0,
            overtime_minutes: 0,
            is_holiday: false,
            break_counted: false,
        })
        .collect();
    WeekBucket {
        week_start,
        week_end: days.last().map(|slot| slot.date).unwrap_or(week_start),
        is_current_week: week_start == week_start_of(today),
        days,
        total_net_minutes: 0,
        total_overtime_minutes: 0,
    }
}

/// Buckets daily summaries into weeks, newest first.
///
/// Data on a non-working weekday has no slot and is dropped from weekly
/// figures. The week containing `today` is always present even when empty.
/// A day contributes to its slot and the week total only when its net is
/// positive; the weekly overtime is derived from the configured weekly
/// target and computed only for weeks with any worked minutes.
pub fn build_weeks(summaries: &BTreeMap<NaiveDate, DailySummary>, standards: &Standards, today: NaiveDate) -> Vec<WeekBucket> {
    let mut weeks: BTreeMap<NaiveDate, WeekBucket> = BTreeMap::new();

    for (date, summary) in summaries {
        let week_start = week_start_of(*date);
        let bucket = weeks
            .entry(week_start)
            .or_insert_with(|| empty_bucket(week_start, standards, today));
        let Some(slot) = bucket.days.iter_mut().find(|slot| slot.date == *date) else {
            continue;
        };

        slot.check_in = summary.check_in;
        slot.check_out = summary.check_out;
        slot.is_holiday = summary.is_holiday;
        slot.break_counted = summary.break_counted;

        let break_minutes = summary.break_minutes.unwrap_or(standards.default_break_minutes) as i64;
        let totals = compute_duration(
            summary.check_in,
            summary.check_out,
            summary.is_holiday,
            summary.break_counted,
            break_minutes,
            standards.daily_work_minutes as i64,
        );
        if totals.net_minutes > 0 {
            slot.net_minutes = totals.net_minutes;
            slot.overtime_minutes = totals.overtime_minutes;
            bucket.total_net_minutes += totals.net_minutes;
        }
    }

    let current = week_start_of(today);
    weeks
        .entry(current)
        .or_insert_with(|| empty_bucket(current, standards, today));

    let weekly_target = standards.weekly_work_minutes();
    for bucket in weeks.values_mut() {
        if bucket.total_net_minutes > 0 {
            bucket.total_overtime_minutes = bucket.total_net_minutes - weekly_target;
        }
    }

    let mut ordered: Vec<WeekBucket> = weeks.into_values().collect();
    ordered.reverse();
    ordered
}
