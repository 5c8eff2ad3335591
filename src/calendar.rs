//! Indian public-holiday calendar and long-weekend classification.
//!
//! The resort prices a single season at a time, so the calendar is a fixed
//! table for one year. Lunar-calendar holidays (Holi, Diwali, the Eids)
//! move every year and are listed here with their observed 2025 dates.

use chrono::{Datelike, NaiveDate, Weekday};

/// One row of the holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayEntry {
    pub date: NaiveDate,
    pub label: &'static str,
}

/// Fixed public-holiday calendar for one year.
///
/// Holidays observed in 2025:
/// * Pongal/Makar Sankranti (Jan 14)
/// * Republic Day (Jan 26)
/// * Maha Shivaratri (Feb 26)
/// * Holi (Mar 14)
/// * Id-ul-Fitr (Mar 31)
/// * Mahavir Jayanti (Apr 10)
/// * Good Friday (Apr 18)
/// * Buddha Purnima (May 12)
/// * Id-ul-Zuha (Jun 7)
/// * Muharram (Jul 6)
/// * Independence Day (Aug 15)
/// * Janmashtami (Aug 16)
/// * Id-e-Milad (Sep 5)
/// * Dussehra/Mahatma Gandhi Jayanti (Oct 2)
/// * Diwali (Oct 20)
/// * Guru Nanak's Birthday (Nov 5)
/// * Christmas Day (Dec 25)
/// * New Year's Eve (Dec 30 and Dec 31, both tagged)
///
/// Immutable after construction; build it once at startup and pass it by
/// reference.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    year: i32,
    entries: Vec<HolidayEntry>,
    year_end_bridge: [NaiveDate; 2],
}

/// (month, day, label) rows for the 2025 table. Dec 30 and Dec 31 carry
/// the same label on purpose: both year-end dates are sold as New Year's
/// Eve days.
const INDIA_2025: [(u32, u32, &str); 19] = [
    (1, 14, "Pongal/Makar Sankranti"),
    (1, 26, "Republic Day"),
    (2, 26, "Maha Shivaratri"),
    (3, 14, "Holi"),
    (3, 31, "Id-ul-Fitr"),
    (4, 10, "Mahavir Jayanti"),
    (4, 18, "Good Friday"),
    (5, 12, "Buddha Purnima"),
    (6, 7, "Id-ul-Zuha (Bakrid)"),
    (7, 6, "Muharram"),
    (8, 15, "Independence Day"),
    (8, 16, "Janmashtami"),
    (9, 5, "Id-e-Milad"),
    (10, 2, "Dussehra/Mahatma Gandhi Jayanti"),
    (10, 20, "Diwali"),
    (11, 5, "Guru Nanak's Birthday"),
    (12, 25, "Christmas Day"),
    (12, 30, "New Year's Eve"),
    (12, 31, "New Year's Eve"),
];

impl HolidayCalendar {
    /// Build the 2025 Indian holiday calendar.
    pub fn india_2025() -> Self {
        Self::from_table(2025, &INDIA_2025)
    }

    fn from_table(year: i32, table: &[(u32, u32, &'static str)]) -> Self {
        let entries = table
            .iter()
            .map(|&(month, day, label)| HolidayEntry {
                date: ymd(year, month, day),
                label,
            })
            .collect();
        Self {
            year,
            entries,
            year_end_bridge: [ymd(year, 12, 30), ymd(year, 12, 31)],
        }
    }

    /// Calendar year this table covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// All holiday rows, in calendar order.
    pub fn entries(&self) -> &[HolidayEntry] {
        &self.entries
    }

    /// Label of the holiday falling on `date`, if any.
    pub fn holiday_label(&self, date: NaiveDate) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.label)
    }

    /// Whether `date` appears in the holiday table.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_label(date).is_some()
    }

    /// Whether `date` participates in a 3- or 4-day weekend bridge.
    ///
    /// A Friday or Monday directly adjacent to a holiday forms a 3-day
    /// bridge; a Friday two days ahead of a holiday (or a Monday two days
    /// past one) forms a 4-day bridge. Dec 30 and Dec 31 count regardless
    /// of weekday: the year-end break is always sold as a long weekend.
    pub fn is_long_weekend(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday();
        let bridge_day = matches!(weekday, Weekday::Fri | Weekday::Mon);

        for entry in &self.entries {
            // Days from `date` forward to the holiday (negative = past it)
            let gap = (entry.date - date).num_days();

            if bridge_day && (gap == 1 || gap == -1) {
                return true;
            }
            if weekday == Weekday::Fri && gap == 2 {
                return true;
            }
            if weekday == Weekday::Mon && gap == -2 {
                return true;
            }
        }

        self.year_end_bridge.contains(&date)
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // The tables above only hold real calendar dates
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    // ==================== holiday lookup tests ====================

    #[test]
    fn test_republic_day_is_holiday() {
        let cal = HolidayCalendar::india_2025();
        assert!(cal.is_holiday(date(1, 26)));
        assert_eq!(cal.holiday_label(date(1, 26)), Some("Republic Day"));
    }

    #[test]
    fn test_regular_day_is_not_holiday() {
        let cal = HolidayCalendar::india_2025();
        assert!(!cal.is_holiday(date(6, 18)));
        assert_eq!(cal.holiday_label(date(6, 18)), None);
    }

    #[test]
    fn test_table_has_nineteen_entries() {
        let cal = HolidayCalendar::india_2025();
        assert_eq!(cal.entries().len(), 19);
        assert_eq!(cal.year(), 2025);
    }

    #[test]
    fn test_year_end_dates_share_label() {
        let cal = HolidayCalendar::india_2025();
        assert_eq!(cal.holiday_label(date(12, 30)), Some("New Year's Eve"));
        assert_eq!(cal.holiday_label(date(12, 31)), Some("New Year's Eve"));
    }

    // ==================== long weekend tests ====================

    #[test]
    fn test_friday_before_saturday_holiday() {
        let cal = HolidayCalendar::india_2025();
        // Aug 15 2025 is a Friday, the day before Janmashtami (Sat Aug 16)
        assert_eq!(date(8, 15).weekday(), Weekday::Fri);
        assert!(cal.is_long_weekend(date(8, 15)));
    }

    #[test]
    fn test_monday_after_sunday_holiday() {
        let cal = HolidayCalendar::india_2025();
        // Jan 27 2025 is the Monday after Republic Day (Sun Jan 26)
        assert_eq!(date(1, 27).weekday(), Weekday::Mon);
        assert!(cal.is_long_weekend(date(1, 27)));
    }

    #[test]
    fn test_friday_two_days_before_sunday_holiday() {
        let cal = HolidayCalendar::india_2025();
        // Jul 4 2025 is a Friday; Muharram falls on Sunday Jul 6
        assert_eq!(date(7, 4).weekday(), Weekday::Fri);
        assert!(cal.is_long_weekend(date(7, 4)));
    }

    #[test]
    fn test_monday_two_days_after_saturday_holiday() {
        let cal = HolidayCalendar::india_2025();
        // Aug 18 2025 is a Monday, two days past Janmashtami (Sat Aug 16)
        assert_eq!(date(8, 18).weekday(), Weekday::Mon);
        assert!(cal.is_long_weekend(date(8, 18)));
    }

    #[test]
    fn test_thursday_next_to_holiday_does_not_bridge() {
        let cal = HolidayCalendar::india_2025();
        // Aug 14 2025 is a Thursday before Independence Day (Fri Aug 15)
        assert_eq!(date(8, 14).weekday(), Weekday::Thu);
        assert!(!cal.is_long_weekend(date(8, 14)));
    }

    #[test]
    fn test_weekend_holiday_itself_is_not_a_bridge_day() {
        let cal = HolidayCalendar::india_2025();
        // Republic Day 2025 is a Sunday; the bridge rules only fire for
        // Fridays and Mondays around a holiday, never the holiday itself
        assert_eq!(date(1, 26).weekday(), Weekday::Sun);
        assert!(!cal.is_long_weekend(date(1, 26)));
    }

    #[test]
    fn test_year_end_bridge_ignores_weekday() {
        let cal = HolidayCalendar::india_2025();
        // Dec 30 2025 is a Tuesday, Dec 31 a Wednesday
        assert_eq!(date(12, 30).weekday(), Weekday::Tue);
        assert!(cal.is_long_weekend(date(12, 30)));
        assert!(cal.is_long_weekend(date(12, 31)));
    }

    #[test]
    fn test_plain_midweek_day() {
        let cal = HolidayCalendar::india_2025();
        // Jun 18 2025 is a Wednesday with no holiday nearby
        assert_eq!(date(6, 18).weekday(), Weekday::Wed);
        assert!(!cal.is_long_weekend(date(6, 18)));
    }
}
