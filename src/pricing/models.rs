//! Domain types for the quote engine.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Recreational add-on with a fixed surcharge.
///
/// Menu numbering (1-7) follows the order of [`Activity::MENU`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Kayaking,
    JetSkiing,
    BananaBoat,
    Paragliding,
    QuadBike,
    CamelRide,
    HorseRide,
}

impl Activity {
    /// All activities in menu order.
    pub const MENU: [Activity; 7] = [
        Activity::Kayaking,
        Activity::JetSkiing,
        Activity::BananaBoat,
        Activity::Paragliding,
        Activity::QuadBike,
        Activity::CamelRide,
        Activity::HorseRide,
    ];

    /// Look up an activity by its 1-based menu number.
    pub fn from_menu_number(number: u32) -> Option<Activity> {
        let index = number.checked_sub(1)? as usize;
        Self::MENU.get(index).copied()
    }

    /// Display name used in the menu and the quote echo.
    pub fn label(self) -> &'static str {
        match self {
            Activity::Kayaking => "Kayaking",
            Activity::JetSkiing => "Jet Skiing",
            Activity::BananaBoat => "Banana Boat Ride",
            Activity::Paragliding => "Paragliding",
            Activity::QuadBike => "Quad Bike Ride",
            Activity::CamelRide => "Camel Ride",
            Activity::HorseRide => "Horse Ride",
        }
    }

    /// Flat surcharge added to the package when selected.
    pub fn surcharge(self) -> Decimal {
        match self {
            Activity::Kayaking | Activity::JetSkiing | Activity::BananaBoat => Decimal::from(500),
            Activity::Paragliding => Decimal::from(1000),
            Activity::QuadBike | Activity::CamelRide | Activity::HorseRide => Decimal::from(250),
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One quote computation's inputs. Built fresh per session, never stored.
///
/// `visit_time` stays a raw string: a time that fails the 12-hour parse is
/// not an input error, it just scores zero.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub visit_date: NaiveDate,
    pub visit_time: String,
    /// Fractional party sizes are allowed (e.g. 2.5 for two adults and a
    /// child on a half tariff).
    pub party_size: Decimal,
    pub include_hotel: bool,
    /// Meals per day, 0-4. Zero means food was declined.
    pub meal_count: u8,
    pub activities: BTreeSet<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_menu_numbers_round_trip() {
        for (index, activity) in Activity::MENU.iter().enumerate() {
            let number = index as u32 + 1;
            assert_eq!(Activity::from_menu_number(number), Some(*activity));
        }
    }

    #[test]
    fn test_menu_number_out_of_range() {
        assert_eq!(Activity::from_menu_number(0), None);
        assert_eq!(Activity::from_menu_number(8), None);
    }

    #[test]
    fn test_surcharges() {
        assert_eq!(Activity::Kayaking.surcharge(), dec!(500));
        assert_eq!(Activity::JetSkiing.surcharge(), dec!(500));
        assert_eq!(Activity::BananaBoat.surcharge(), dec!(500));
        assert_eq!(Activity::Paragliding.surcharge(), dec!(1000));
        assert_eq!(Activity::QuadBike.surcharge(), dec!(250));
        assert_eq!(Activity::CamelRide.surcharge(), dec!(250));
        assert_eq!(Activity::HorseRide.surcharge(), dec!(250));
    }
}
