//! Desirability scoring for visit slots.
//!
//! Pure functions, no I/O. A date scores 5-10 from its position in the
//! week and the holiday calendar; a clock time scores 0-8 depending on
//! holiday peak bands. The combined score is capped at 20 and feeds the
//! price formula linearly.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// Peak visiting bands on public holidays, inclusive at both endpoints:
/// 09:00-11:00, 13:00-15:00 and 17:00-23:00.
const PEAK_BANDS: [((u32, u32), (u32, u32)); 3] = [
    ((9, 0), (11, 0)),
    ((13, 0), (15, 0)),
    ((17, 0), (23, 0)),
];

/// Parse a 12-hour clock string with an am/pm suffix (e.g. "10:30 AM").
///
/// Returns `None` on any malformed input; callers treat that as a zero
/// time score rather than an error.
pub fn parse_clock(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%I:%M %p").ok()
}

/// Score a date from its weekday, long-weekend and holiday status.
///
/// Decision table, first matching row wins:
///
/// | condition                    | long weekend | score |
/// |------------------------------|--------------|-------|
/// | Saturday or Sunday           | yes          | 10    |
/// | Saturday or Sunday           | no           | 9     |
/// | public holiday (midweek)     | yes          | 10    |
/// | public holiday (midweek)     | no           | 8     |
/// | regular weekday              | -            | 5     |
///
/// Weekend days are checked before holiday status, so a holiday falling
/// on a Saturday or Sunday scores as a weekend day.
pub fn day_score(date: NaiveDate, long_weekend: bool, public_holiday: bool) -> u8 {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        if long_weekend {
            10
        } else {
            9
        }
    } else if public_holiday {
        if long_weekend {
            10
        } else {
            8
        }
    } else {
        5
    }
}

/// Score a clock time.
///
/// A failed parse (`None`) scores 0 unconditionally, even on holidays.
/// On a public holiday a time inside any peak band scores 8, otherwise 5.
/// Off holidays every parsed time scores 5.
pub fn time_score(time: Option<NaiveTime>, public_holiday: bool) -> u8 {
    let Some(time) = time else {
        return 0;
    };
    if public_holiday && in_peak_band(time) {
        8
    } else {
        5
    }
}

/// Combine day and time scores, capped at 20.
pub fn final_score(day_score: u8, time_score: u8) -> u8 {
    (day_score + time_score).min(20)
}

fn in_peak_band(time: NaiveTime) -> bool {
    PEAK_BANDS
        .iter()
        .any(|&(start, end)| time >= hm(start) && time <= hm(end))
}

fn hm((hour, minute): (u32, u32)) -> NaiveTime {
    // PEAK_BANDS only holds real times of day
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}
