use station_fetcher::config::RunConfig;
use station_fetcher::pipeline::{RunOutcome, run};
use tracing_subscriber::EnvFilter;

const RULE: &str = "============================================================";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("station_fetcher=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from_env();

    println!("{RULE}");
    println!("🚂 China Train Stations Scraper");
    println!("{RULE}");

    match run(&config).await {
        RunOutcome::NoData => {
            println!("❌ No station data retrieved. Exiting.");
        }
        RunOutcome::NoValidStations => {
            println!("❌ No valid stations processed. Exiting.");
        }
        RunOutcome::Saved { count, path } => {
            println!();
            println!("✅ Scraping completed successfully!");
            println!("📊 Total stations saved: {count}");
            println!("📁 Output file: {}", path.display());
        }
        RunOutcome::WriteFailed { .. } => {
            println!();
            println!("❌ Failed to save data to file.");
        }
    }
}
