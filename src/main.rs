use altfinder::config::LogFormat;
use altfinder::{AppState, Config, Tool};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
struct Listing<'a> {
    theme: String,
    title: String,
    categories: Vec<String>,
    featured: Vec<&'a str>,
    results: Vec<&'a Tool>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting AltFinder catalog");

    let config = Config::from_env()?;

    let start = std::time::Instant::now();
    let state = AppState::new(config)?;
    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        theme = %state.theme(),
        "State initialized",
    );

    let results = state.visible_tools();
    tracing::info!(
        matched = results.len(),
        total = state.catalog.len(),
        "Query applied"
    );

    let listing = Listing {
        theme: state.theme().to_string(),
        title: state.list_title(),
        categories: state.catalog.categories(),
        featured: state
            .featured_tools()
            .iter()
            .map(|tool| tool.name.as_str())
            .collect(),
        results,
    };

    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "altfinder=info".into());

    // Logs go to stderr so stdout stays valid JSON
    match LogFormat::from_env() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
