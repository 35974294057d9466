use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Per-date break policy side-table.
///
/// `break_counted` means the day keeps its break as working time (no
/// deduction); `break_minutes` overrides the configured default deduction
/// for one date. Reads are infallible; absent dates report the defaults.
pub trait BreakTable {
    fn break_counted(&self, date: NaiveDate) -> bool;
    fn set_break_counted(&self, date: NaiveDate, counted: bool);
    fn break_minutes(&self, date: NaiveDate) -> Option<u32>;
    fn set_break_minutes(&self, date: NaiveDate, minutes: u32);
}

/// In-memory break side-table. Only non-default values are stored.
#[derive(Debug, Default)]
pub struct MemoryBreakTable {
    counted: RwLock<HashMap<NaiveDate, bool>>,
    minutes: RwLock<HashMap<NaiveDate, u32>>,
}

impl MemoryBreakTable {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BreakTable for MemoryBreakTable {
    fn break_counted(&self, date: NaiveDate) -> bool {
        self.counted.read().get(&date).copied().unwrap_or(false)
    }

    fn set_break_counted(&self, date: NaiveDate, counted: bool) {
        if counted {
            self.counted.write().insert(date, true);
        } else {
            self.counted.write().remove(&date);
        }
    }

    fn break_minutes(&self, date: NaiveDate) -> Option<u32> {
        self.minutes.read().get(&date).copied()
    }

    fn set_break_minutes(&self, date: NaiveDate, minutes: u32) {
        if minutes > 0 {
            self.minutes.write().insert(date, minutes);
        } else {
            self.minutes.write().remove(&date);
        }
    }
}
