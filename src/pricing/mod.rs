//! Pricing engine for beach resort day packages.
//!
//! Pure scoring and money math composed into per-visit quotes. Nothing in
//! this module touches I/O; the console session feeds it and formats what
//! comes back.

pub mod calculators;
pub mod models;
pub mod responses;
pub mod scoring;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, total_price};
pub use models::{Activity, QuoteRequest};
pub use responses::{Money, QuoteResponse};
pub use scoring::{day_score, final_score, parse_clock, time_score};
pub use services::{price_quote, score_visit, ScoreBreakdown};
