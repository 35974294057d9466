#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::BTreeMap;
    use stempel::libs::month::build_months;
    use stempel::libs::standards::Standards;
    use stempel::libs::summary::DailySummary;
    use stempel::libs::week::build_weeks;

    fn clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn worked(day: NaiveDate, check_in: NaiveTime, check_out: NaiveTime) -> DailySummary {
        DailySummary {
            check_in: Some(check_in),
            check_out: Some(check_out),
            ..DailySummary::new(day)
        }
    }

    #[test]
    fn test_target_accrues_for_unrecorded_working_days() {
        // One worked Monday; today is the Wednesday two days later. The
        // Monday and Tuesday slots are considered, today's is not.
        let monday = date(2026, 8, 24);
        let today = date(2026, 8, 26);
        let mut summaries = BTreeMap::new();
        summaries.insert(monday, worked(monday, clock(9, 0), clock(17, 0)));

        let standards = Standards::default();
        let weeks = build_weeks(&summaries, &standards, today);
        let months = build_months(&weeks, &standards, today);

        assert_eq!(months.len(), 1);
        let month = &months[0];
        assert_eq!((month.year, month.month), (2026, 8));
        assert_eq!(month.day_count, 2);
        assert_eq!(month.target_minutes, 2 * 420);
        assert_eq!(month.worked_minutes, 450);
        assert_eq!(month.balance_minutes, 450 - 840);
    }

    #[test]
    fn test_evening_minutes_past_threshold() {
        let monday = date(2026, 8, 24);
        let tuesday = date(2026, 8, 25);
        let today = date(2026, 8, 26);
        let mut summaries = BTreeMap::new();
        // 20:45 check-out is 45 minutes past the 20:00 threshold.
        summaries.insert(monday, worked(monday, clock(12, 0), clock(20, 45)));
        // 21:00 adds another 60; evening minutes accumulate across days.
        summaries.insert(tuesday, worked(tuesday, clock(12, 0), clock(21, 0)));

        let standards = Standards::default();
        let weeks = build_weeks(&summaries, &standards, today);
        let months = build_months(&weeks, &standards, today);
        assert_eq!(months[0].evening_minutes, 105);
    }

    #[test]
    fn test_slots_on_or_after_today_are_ignored() {
        let wednesday = date(2026, 8, 26);
        let mut summaries = BTreeMap::new();
        summaries.insert(wednesday, worked(wednesday, clock(9, 0), clock(17, 0)));

        let standards = Standards::default();
        // Today is Monday of the same week, so every slot is in the future.
        let today = date(2026, 8, 24);
        let weeks = build_weeks(&summaries, &standards, today);
        let months = build_months(&weeks, &standards, today);
        assert!(months.is_empty());
    }

    #[test]
    fn test_full_week_of_target_across_month_boundary() {
        // Week of 2026-06-29 spans June and July; slots land in both months.
        let today = date(2026, 7, 6);
        let mut summaries = BTreeMap::new();
        let tuesday = date(2026, 6, 30);
        summaries.insert(tuesday, worked(tuesday, clock(9, 0), clock(16, 30)));

        let standards = Standards::default();
        let weeks = build_weeks(&summaries, &standards, today);
        let months = build_months(&weeks, &standards, today);

        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[0].month), (2026, 7));
        let july = &months[0];
        assert_eq!(july.day_count, 3);
        assert_eq!(july.target_minutes, 3 * 420);
        assert_eq!(july.worked_minutes, 0);
        assert_eq!((months[1].year, months[1].month), (2026, 6));
        let june = &months[1];
        assert_eq!(june.day_count, 2);
        assert_eq!(june.worked_minutes, 420);
        assert_eq!(june.target_minutes, 840);
    }

    #[test]
    fn test_months_are_newest_first() {
        let today = date(2026, 8, 26);
        let mut summaries = BTreeMap::new();
        let july_day = date(2026, 7, 6);
        let august_day = date(2026, 8, 24);
        summaries.insert(july_day, worked(july_day, clock(9, 0), clock(17, 0)));
        summaries.insert(august_day, worked(august_day, clock(9, 0), clock(17, 0)));

        let standards = Standards::default();
        let weeks = build_weeks(&summaries, &standards, today);
        let months = build_months(&weeks, &standards, today);
        assert_eq!((months[0].year, months[0].month), (2026, 8));
        assert_eq!((months[1].year, months[1].month), (2026, 7));
    }
}
