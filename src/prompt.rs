//! Instruction template for the snapshot request.

use chrono::Local;

/// Builds the full instruction text for one snapshot request, with the
/// trading day interpolated into the fixed template.
///
/// The template enumerates every data point the response schema requires;
/// keep the two in sync when either changes.
pub fn snapshot_prompt(date: &str) -> String {
    format!(
        "Fetch the latest closing market data for Indian markets as of {date} or the most recent trading day.\n\
        Include:\n\
        - Nifty 50, Sensex, and Nifty Bank values and changes.\n\
        - Gold (10gm) price and change.\n\
        - Brent Crude Oil price and change.\n\
        - USD/INR rate and change.\n\
        - Top 5 Gainers of Nifty 50 (Company, Price, % Change).\n\
        - Top 5 Losers of Nifty 50 (Company, Price, % Change).\n\
        - FII and DII Cash segment data (Daily and Month-Till-Date).\n\
        - Nifty 50 Advance/Decline ratio.\n\
        \n\
        Set isPositive to true exactly when the corresponding change is a gain.\n\
        Return the data in a strict JSON format matching the schema provided, with no surrounding text."
    )
}

/// Current local date in a human-readable form, e.g. `Tuesday, 4 August 2026`.
pub fn current_date_display() -> String {
    Local::now().format("%A, %-d %B %Y").to_string()
}
