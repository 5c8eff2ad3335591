//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no clock access.

use std::collections::BTreeSet;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::pricing::models::Activity;

/// Hotel stay surcharge per package.
const HOTEL_PRICE: i64 = 1000;
/// Price per included meal.
const FOOD_PRICE_PER_MEAL: i64 = 500;
/// Per-room rate multiplied by the desirability score.
const ROOM_SCORE_RATE: i64 = 250;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use beachpack::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Number of rooms needed for a party: two guests per room, rounded up.
///
/// Any positive party size books at least one room. Zero (or a negative)
/// party books none.
pub fn room_count(party_size: Decimal) -> Decimal {
    if party_size <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (party_size / Decimal::TWO).ceil()
}

/// Calculate the total package price.
///
/// An empty party short-circuits to zero regardless of every other input.
/// Otherwise the price accumulates the hotel surcharge, the per-meal food
/// charge and the flat add-on surcharges, then adds the score-linked room
/// charge: rooms x final score x 250.
///
/// No currency rounding happens here; the display boundary rounds via
/// [`round_money`].
pub fn total_price(
    final_score: u8,
    party_size: Decimal,
    include_hotel: bool,
    meal_count: u8,
    activities: &BTreeSet<Activity>,
) -> Decimal {
    if party_size <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let rooms = room_count(party_size);
    let mut total = Decimal::ZERO;

    if include_hotel {
        total += Decimal::from(HOTEL_PRICE);
    }

    total += Decimal::from(meal_count) * Decimal::from(FOOD_PRICE_PER_MEAL);

    for activity in activities {
        total += activity.surcharge();
    }

    total += rooms * Decimal::from(final_score) * Decimal::from(ROOM_SCORE_RATE);
    total
}
