use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::records::BudgetPeriod;

/// Half-open calendar interval `[start, end)` over which spend is measured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.contains_date(instant.date_naive())
    }
}

impl BudgetPeriod {
    /// The period window containing `reference`.
    ///
    /// Weekly windows start on the ISO Monday; monthly windows run from the
    /// first of the month to the first of the next (month length and year
    /// rollover fall out of the arithmetic); yearly windows run Jan 1 to
    /// Jan 1.
    pub fn window_for(&self, reference: NaiveDate) -> PeriodWindow {
        match self {
            BudgetPeriod::Weekly => {
                let offset = reference.weekday().num_days_from_monday() as i64;
                let start = reference - Duration::days(offset);
                PeriodWindow {
                    start,
                    end: start + Duration::days(7),
                }
            }
            BudgetPeriod::Monthly => {
                let start = reference.with_day(1).unwrap();
                let (year, month) = if start.month() == 12 {
                    (start.year() + 1, 1)
                } else {
                    (start.year(), start.month() + 1)
                };
                PeriodWindow {
                    start,
                    end: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
                }
            }
            BudgetPeriod::Yearly => PeriodWindow {
                start: NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1).unwrap(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_window_handles_leap_february() {
        let window = BudgetPeriod::Monthly.window_for(date(2024, 2, 15));
        assert_eq!(window.start, date(2024, 2, 1));
        assert_eq!(window.end, date(2024, 3, 1));
        assert!(window.contains_date(date(2024, 2, 29)));
        assert!(!window.contains_date(date(2024, 3, 1)));
    }

    #[test]
    fn monthly_window_rolls_over_december() {
        let window = BudgetPeriod::Monthly.window_for(date(2023, 12, 31));
        assert_eq!(window.start, date(2023, 12, 1));
        assert_eq!(window.end, date(2024, 1, 1));
    }

    #[test]
    fn weekly_window_starts_on_monday() {
        // 2024-02-15 is a Thursday.
        let window = BudgetPeriod::Weekly.window_for(date(2024, 2, 15));
        assert_eq!(window.start, date(2024, 2, 12));
        assert_eq!(window.end, date(2024, 2, 19));
        // A Monday reference is already the window start.
        let monday = BudgetPeriod::Weekly.window_for(date(2024, 2, 12));
        assert_eq!(monday.start, date(2024, 2, 12));
    }

    #[test]
    fn yearly_window_spans_calendar_year() {
        let window = BudgetPeriod::Yearly.window_for(date(2024, 7, 4));
        assert_eq!(window.start, date(2024, 1, 1));
        assert_eq!(window.end, date(2025, 1, 1));
    }

    #[test]
    fn window_is_half_open() {
        let window = BudgetPeriod::Monthly.window_for(date(2024, 2, 15));
        assert!(window.contains_date(window.start));
        assert!(!window.contains_date(window.end));
    }
}
