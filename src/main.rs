use tracing_subscriber::EnvFilter;

use beachpack::calendar::HolidayCalendar;
use beachpack::console::{self, OutputMode};

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = if std::env::args().any(|arg| arg == "--json") {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let calendar = HolidayCalendar::india_2025();

    // A single invalid field aborts the whole quote: report it and exit
    // normally, the session has nothing to retry
    if let Err(error) = console::run_session(&calendar, mode) {
        println!("An error occurred: {error}");
    }
}
