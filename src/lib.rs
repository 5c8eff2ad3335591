//! Beach resort day-package pricing.
//!
//! Computes a dynamic price quote for a day package from the chosen date,
//! time of day, party size and add-ons. Desirability is scored 0-20 from
//! a fixed Indian public-holiday calendar (long-weekend bridges, weekend
//! and holiday premiums, holiday peak-time bands) and feeds the price
//! linearly. The whole engine is a chain of pure functions; the console
//! session in [`console`] is the only I/O surface.

pub mod calendar;
pub mod console;
pub mod error;
pub mod pricing;

// Re-export commonly used items
pub use calendar::{HolidayCalendar, HolidayEntry};
pub use error::{AppError, Result};
pub use pricing::{price_quote, QuoteRequest, QuoteResponse};
