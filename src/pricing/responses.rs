//! Serializable quote output DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::pricing::models::Activity;

/// Money value for quote output
#[derive(Debug, Clone, Serialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// A fully priced day-package quote.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub visit_date: NaiveDate,
    /// Weekday name of the visit date ("Friday", "Sunday", ...).
    pub day_name: String,
    /// Holiday label when the visit date is in the calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
    pub long_weekend: bool,
    pub day_score: u8,
    pub time_score: u8,
    pub final_score: u8,
    pub include_hotel: bool,
    pub meal_count: u8,
    pub activities: Vec<Activity>,
    pub total: Money,
}
