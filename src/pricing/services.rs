//! Quote composition.
//!
//! Wires the holiday calendar and the pure scoring and money functions
//! into a single quote per request.

use chrono::NaiveDate;

use crate::calendar::HolidayCalendar;
use crate::pricing::calculators;
use crate::pricing::models::QuoteRequest;
use crate::pricing::responses::{Money, QuoteResponse};
use crate::pricing::scoring;

/// Currency for every quoted amount.
pub const CURRENCY: &str = "INR";

/// Score breakdown for one visit slot
#[derive(Debug, Clone, Copy)]
pub struct ScoreBreakdown {
    pub public_holiday: bool,
    pub long_weekend: bool,
    pub day_score: u8,
    pub time_score: u8,
    pub final_score: u8,
}

/// Score a visit slot against the holiday calendar.
///
/// The time string goes through the strict 12-hour parse; a malformed
/// time lands as a zero time score, never an error.
pub fn score_visit(
    calendar: &HolidayCalendar,
    visit_date: NaiveDate,
    visit_time: &str,
) -> ScoreBreakdown {
    let public_holiday = calendar.is_holiday(visit_date);
    let long_weekend = calendar.is_long_weekend(visit_date);

    let day_score = scoring::day_score(visit_date, long_weekend, public_holiday);
    let time_score = scoring::time_score(scoring::parse_clock(visit_time), public_holiday);
    let final_score = scoring::final_score(day_score, time_score);

    tracing::debug!(
        "Scored {}: day {} + time {} -> {} (holiday: {}, long weekend: {})",
        visit_date,
        day_score,
        time_score,
        final_score,
        public_holiday,
        long_weekend
    );

    ScoreBreakdown {
        public_holiday,
        long_weekend,
        day_score,
        time_score,
        final_score,
    }
}

/// Price a quote request into a response ready for display.
pub fn price_quote(calendar: &HolidayCalendar, request: &QuoteRequest) -> QuoteResponse {
    let scores = score_visit(calendar, request.visit_date, &request.visit_time);

    let total = calculators::total_price(
        scores.final_score,
        request.party_size,
        request.include_hotel,
        request.meal_count,
        &request.activities,
    );

    QuoteResponse {
        visit_date: request.visit_date,
        day_name: request.visit_date.format("%A").to_string(),
        holiday: calendar.holiday_label(request.visit_date).map(str::to_string),
        long_weekend: scores.long_weekend,
        day_score: scores.day_score,
        time_score: scores.time_score,
        final_score: scores.final_score,
        include_hotel: request.include_hotel,
        meal_count: request.meal_count,
        activities: request.activities.iter().copied().collect(),
        total: Money {
            amount: total,
            currency: CURRENCY.to_string(),
        },
    }
}
