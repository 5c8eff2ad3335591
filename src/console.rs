//! Interactive console session.
//!
//! Thin prompt/print wrapper around the pricing engine. Every field is
//! parsed at the point of entry; the first invalid one aborts the run and
//! surfaces at the boundary in `main`.

use std::collections::BTreeSet;
use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::HolidayCalendar;
use crate::error::{AppError, Result};
use crate::pricing::calculators::round_money;
use crate::pricing::models::{Activity, QuoteRequest};
use crate::pricing::responses::QuoteResponse;
use crate::pricing::services;

/// How the finished quote is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text block with the rupee glyph.
    Text,
    /// Pretty-printed JSON of the quote DTO.
    Json,
}

/// Run one interactive quote session.
pub fn run_session(calendar: &HolidayCalendar, mode: OutputMode) -> Result<()> {
    let visit_time = prompt("Enter the time in HH:MM am/pm format (e.g., 10:30 AM): ")?;
    let visit_date = parse_date(&prompt(
        "Enter the date in YYYY-MM-DD format (e.g., 2025-01-15): ",
    )?)?;
    let party_size = parse_party_size(&prompt("Enter the number of people (e.g., 1, 2, 2.5): ")?)?;

    // The budget is collected and validated but does not feed the price
    let budget = parse_decimal(&prompt("Enter your budget: ")?)?;
    tracing::debug!("Budget hint: {}", budget);

    let include_hotel = parse_yes_no(&prompt("Include hotel? (yes/no): ")?);

    let mut meal_count = 0;
    if parse_yes_no(&prompt("Include food? (yes/no): ")?) {
        meal_count = parse_meal_count(&prompt("Enter the number of times food (1, 2, 3, or 4): ")?)?;
    }

    let mut activities = BTreeSet::new();
    if include_hotel {
        print_activity_menu();
        let selection = prompt("Enter the numbers of the activities you want to include (e.g., 1,3,5): ")?;
        let (chosen, rejected) = parse_activity_selection(&selection)?;
        for number in rejected {
            tracing::warn!("Activity number {} out of range, skipping", number);
            println!("Invalid activity number: {number}");
        }
        activities = chosen;
    }

    let request = QuoteRequest {
        visit_date,
        visit_time,
        party_size,
        include_hotel,
        meal_count,
        activities,
    };
    let quote = services::price_quote(calendar, &request);

    match mode {
        OutputMode::Text => print_quote(&quote),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(input.to_string()))
}

fn parse_decimal(input: &str) -> Result<Decimal> {
    input
        .parse::<Decimal>()
        .map_err(|_| AppError::InvalidNumber(input.to_string()))
}

fn parse_party_size(input: &str) -> Result<Decimal> {
    let value = parse_decimal(input)?;
    if value < Decimal::ZERO {
        return Err(AppError::InvalidNumber(input.to_string()));
    }
    Ok(value)
}

/// "yes" (any casing) is true; everything else, including typos, is no.
fn parse_yes_no(input: &str) -> bool {
    input.eq_ignore_ascii_case("yes")
}

fn parse_meal_count(input: &str) -> Result<u8> {
    let count: i64 = input
        .parse()
        .map_err(|_| AppError::InvalidNumber(input.to_string()))?;
    if !(1..=4).contains(&count) {
        return Err(AppError::MealCountOutOfRange(count));
    }
    Ok(count as u8)
}

/// Parse a comma-separated activity selection ("1,3,5").
///
/// Returns the chosen activities and the in-format-but-unknown menu
/// numbers, which the caller reports without aborting. A non-numeric
/// token aborts; an empty line means no add-ons.
fn parse_activity_selection(input: &str) -> Result<(BTreeSet<Activity>, Vec<u32>)> {
    let mut chosen = BTreeSet::new();
    let mut rejected = Vec::new();

    if input.trim().is_empty() {
        return Ok((chosen, rejected));
    }

    for token in input.split(',') {
        let token = token.trim();
        let number: u32 = token
            .parse()
            .map_err(|_| AppError::InvalidActivityToken(token.to_string()))?;
        match Activity::from_menu_number(number) {
            Some(activity) => {
                chosen.insert(activity);
            }
            None => rejected.push(number),
        }
    }

    Ok((chosen, rejected))
}

fn print_activity_menu() {
    println!("\nAvailable Recreational Activities:");
    for (index, activity) in Activity::MENU.iter().enumerate() {
        println!("{}. {} - ₹{}", index + 1, activity.label(), activity.surcharge());
    }
}

fn print_quote(quote: &QuoteResponse) {
    println!();
    println!(
        "The calculated score for {} ({}) is: {}",
        quote.visit_date, quote.day_name, quote.final_score
    );
    if let Some(holiday) = &quote.holiday {
        println!("Public holiday: {holiday}");
    }
    if quote.long_weekend {
        println!("Part of a long weekend");
    }
    println!(
        "The total price is: ₹{:.2}",
        round_money(quote.total.amount, 2)
    );

    println!("\nSelected Options:");
    println!(
        "Include Hotel: {}",
        if quote.include_hotel { "Yes" } else { "No" }
    );
    println!("Food Times: {}", quote.meal_count);
    println!("Recreational Activities:");
    for activity in &quote.activities {
        println!("  {activity}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== field parser tests ====================

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn test_parse_party_size() {
        assert_eq!(parse_party_size("2.5").unwrap(), dec!(2.5));
        assert_eq!(parse_party_size("0").unwrap(), dec!(0));
        assert!(parse_party_size("-1").is_err());
        assert!(parse_party_size("two").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("yes"));
        assert!(parse_yes_no("YES"));
        assert!(!parse_yes_no("no"));
        // Anything unrecognized counts as no
        assert!(!parse_yes_no("maybe"));
    }

    #[test]
    fn test_parse_meal_count_range() {
        assert_eq!(parse_meal_count("1").unwrap(), 1);
        assert_eq!(parse_meal_count("4").unwrap(), 4);
        assert!(matches!(
            parse_meal_count("0"),
            Err(AppError::MealCountOutOfRange(0))
        ));
        assert!(matches!(
            parse_meal_count("5"),
            Err(AppError::MealCountOutOfRange(5))
        ));
        assert!(matches!(
            parse_meal_count("lots"),
            Err(AppError::InvalidNumber(_))
        ));
    }

    // ==================== activity selection tests ====================

    #[test]
    fn test_parse_activity_selection() {
        let (chosen, rejected) = parse_activity_selection("1, 3,5").unwrap();
        assert_eq!(
            chosen.into_iter().collect::<Vec<_>>(),
            vec![Activity::Kayaking, Activity::BananaBoat, Activity::QuadBike]
        );
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_parse_activity_selection_out_of_range_is_skipped() {
        let (chosen, rejected) = parse_activity_selection("2,9").unwrap();
        assert_eq!(chosen.into_iter().collect::<Vec<_>>(), vec![Activity::JetSkiing]);
        assert_eq!(rejected, vec![9]);
    }

    #[test]
    fn test_parse_activity_selection_non_numeric_aborts() {
        assert!(matches!(
            parse_activity_selection("1,kayak"),
            Err(AppError::InvalidActivityToken(_))
        ));
    }

    #[test]
    fn test_parse_activity_selection_empty_means_none() {
        let (chosen, rejected) = parse_activity_selection("  ").unwrap();
        assert!(chosen.is_empty());
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_parse_activity_selection_duplicates_collapse() {
        let (chosen, _) = parse_activity_selection("4,4,4").unwrap();
        assert_eq!(chosen.len(), 1);
        assert!(chosen.contains(&Activity::Paragliding));
    }
}
