//! User-tunable working-time standards.
//!
//! Holds the parameters every aggregation is measured against: the daily
//! target, the default break deduction, the evening-hours threshold and the
//! set of weekdays that count as working days. All durations are minutes.
//!
//! ## Default Values
//!
//! - **Daily target**: 420 minutes (7 hours)
//! - **Default break**: 30 minutes, deducted unless a day opts out
//! - **Evening threshold**: 1200 minutes (20:00); check-outs past it accrue
//!   evening minutes in the monthly balance
//! - **Working weekdays**: Monday through Friday
//!
//! ## Usage
//!
//! ```rust
//! use stempel::libs::standards::{Standards, StandardsPatch};
//!
//! let mut standards = Standards::default();
//! assert_eq!(standards.weekly_work_minutes(), 2100);
//!
//! standards.apply(StandardsPatch {
//!     daily_work_minutes: Some(480),
//!     ..Default::default()
//! });
//! assert_eq!(standards.daily_work_minutes, 480);
//! ```

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAILY_WORK_MINUTES: u32 = 420;
pub const DEFAULT_BREAK_MINUTES: u32 = 30;
pub const DEFAULT_EVENING_THRESHOLD_MINUTES: u32 = 1200;

fn default_daily_work_minutes() -> u32 {
    DEFAULT_DAILY_WORK_MINUTES
}

fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

fn default_evening_threshold_minutes() -> u32 {
    DEFAULT_EVENING_THRESHOLD_MINUTES
}

fn default_working_weekdays() -> Vec<Weekday> {
    vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
}

/// Working-time parameters for one account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standards {
    /// Target working minutes per working day. Must be positive.
    #[serde(default = "default_daily_work_minutes")]
    pub daily_work_minutes: u32,

    /// Break minutes deducted from a day's gross span unless the day is a
    /// holiday or has opted out of the deduction.
    #[serde(default = "default_break_minutes")]
    pub default_break_minutes: u32,

    /// Minute-of-day past which a check-out accrues evening minutes.
    #[serde(default = "default_evening_threshold_minutes")]
    pub evening_threshold_minutes: u32,

    /// Weekdays that count as working days.
    #[serde(default = "default_working_weekdays")]
    pub working_weekdays: Vec<Weekday>,
}

impl Default for Standards {
    fn default() -> Self {
        Self {
            daily_work_minutes: default_daily_work_minutes(),
            default_break_minutes: default_break_minutes(),
            evening_threshold_minutes: default_evening_threshold_minutes(),
            working_weekdays: default_working_weekdays(),
        }
    }
}

impl Standards {
    /// Working weekdays in Monday-first order with duplicates removed.
    pub fn sorted_working_weekdays(&self) -> Vec<Weekday> {
        let mut days = self.working_weekdays.clone();
        days.sort_by_key(|day| day.num_days_from_monday());
        days.dedup();
        days
    }

    /// Weekly target derived from the daily target and the working-day set.
    pub fn weekly_work_minutes(&self) -> i64 {
        self.daily_work_minutes as i64 * self.sorted_working_weekdays().len() as i64
    }

    pub fn is_working_weekday(&self, weekday: Weekday) -> bool {
        self.working_weekdays.contains(&weekday)
    }

    /// Applies a partial update, leaving unset fields untouched.
    pub fn apply(&mut self, patch: StandardsPatch) {
        if let Some(minutes) = patch.daily_work_minutes {
            self.daily_work_minutes = minutes;
        }
        if let Some(minutes) = patch.default_break_minutes {
            self.default_break_minutes = minutes;
        }
        if let Some(minutes) = patch.evening_threshold_minutes {
            self.evening_threshold_minutes = minutes;
        }
        if let Some(weekdays) = patch.working_weekdays {
            self.working_weekdays = weekdays;
        }
    }
}

/// Partial update for [`Standards`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StandardsPatch {
    pub daily_work_minutes: Option<u32>,
    pub default_break_minutes: Option<u32>,
    pub evening_threshold_minutes: Option<u32>,
    pub working_weekdays: Option<Vec<Weekday>>,
}
