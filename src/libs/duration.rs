//! Gross/net/overtime calculation for a single day.

use crate::libs::formatter::minutes_since_midnight;
use chrono::NaiveTime;

/// Computed working-time figures for one day, in minutes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DayTotals {
    pub gross_minutes: i64,
    pub net_minutes: i64,
    pub overtime_minutes: i64,
}

/// Computes the day's figures from its clock endpoints and break policy.
///
/// A missing endpoint or a non-positive span (overnight shifts are not
/// supported) yields all zeros. Holidays and break-opted-out days keep the
/// gross span as net; otherwise the break is deducted and the net floored at
/// zero. Overtime is the floored net measured against the daily target.
pub fn compute_duration(
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
    is_holiday: bool,
    break_counted: bool,
    break_minutes: i64,
    daily_target_minutes: i64,
) -> DayTotals {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return DayTotals::default();
    };

    let gross = minutes_since_midnight(check_out) - minutes_since_midnight(check_in);
    if gross <= 0 {
        return DayTotals::default();
    }

    let net = if is_holiday || break_counted { gross } else { gross - break_minutes };
    let net = net.max(0);

    DayTotals {
        gross_minutes: gross,
        net_minutes: net,
        overtime_minutes: net - daily_target_minutes,
    }
}
