use harshad::HarshadError;
use harshad::client::SnapshotFetcher;
use harshad::config::fetch_config;
use harshad::credentials::{self, CredentialKey};
use harshad::models::flows::InstitutionalFlow;
use harshad::models::metric::IndexMetric;
use harshad::models::snapshot::MarketSnapshot;

#[tokio::main]
async fn main() -> Result<(), HarshadError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    if std::env::args().nth(1).as_deref() == Some("set-key") {
        return store_api_key();
    }

    credentials::populate_env_from_keychain();
    let app_config = fetch_config()?;

    let fetcher = SnapshotFetcher::new(app_config.gemini)?;
    let snapshot = fetcher.fetch_market_snapshot().await?;
    print_snapshot(&snapshot);

    Ok(())
}

/// Reads an API key from stdin and stores it in the system keychain.
fn store_api_key() -> Result<(), HarshadError> {
    eprint!("Gemini API key: ");
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| HarshadError::Config(format!("failed to read key from stdin: {e}")))?;

    let key = line.trim();
    if key.is_empty() {
        return Err(HarshadError::Config("no key entered".to_string()));
    }

    credentials::save(CredentialKey::GeminiApiKey, key)?;
    eprintln!("Stored key in the system keychain.");
    Ok(())
}

/// Renders the snapshot as a plain-text report on stdout.
fn print_snapshot(snapshot: &MarketSnapshot) {
    println!("Market snapshot for {}", snapshot.date);
    println!();
    println!("Indices");
    print_quote("Nifty 50", &snapshot.indices.nifty50);
    print_quote("Sensex", &snapshot.indices.sensex);
    print_quote("Nifty Bank", &snapshot.indices.nifty_bank);
    println!();
    println!("Commodities and FX");
    print_quote("Gold (10g)", &snapshot.commodities.gold);
    print_quote("Brent Crude", &snapshot.commodities.oil);
    print_quote("USD/INR", &snapshot.commodities.usd_inr);
    println!();
    println!("Top gainers");
    for stock in &snapshot.gainers {
        println!(
            "  {:<28} {:>12} {:>9}",
            stock.company, stock.price, stock.percent_change
        );
    }
    println!("Top losers");
    for stock in &snapshot.losers {
        println!(
            "  {:<28} {:>12} {:>9}",
            stock.company, stock.price, stock.percent_change
        );
    }
    println!();
    println!(
        "Breadth: {} advances ({}) / {} declines ({})",
        snapshot.advance_decline.advances,
        snapshot.advance_decline.advance_percent,
        snapshot.advance_decline.declines,
        snapshot.advance_decline.decline_percent
    );
    print_flow("FII", &snapshot.fii);
    print_flow("DII", &snapshot.dii);

    if !snapshot.sources.is_empty() {
        println!();
        println!("Sources");
        for source in &snapshot.sources {
            println!("  {} <{}>", source.title, source.uri);
        }
    }
}

fn print_quote(label: &str, quote: &IndexMetric) {
    println!(
        "  {:<12} {:>12}  {} ({})",
        label, quote.value, quote.change, quote.percent_change
    );
}

fn print_flow(label: &str, flow: &InstitutionalFlow) {
    println!(
        "{} net: {} today, {} MTD (gross {} / {})",
        label, flow.daily.net, flow.mtd.net, flow.daily.gross_purchase, flow.daily.gross_sales
    );
}
