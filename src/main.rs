//! Wiring & DI. Entry point: load config, build adapters, inject into the service, print.
//! No business logic here; the pipeline lives in ReportService.

use clap::Parser;
use dotenv::dotenv;
use shodan_exposure_box::adapters::gist::GistPublisher;
use shodan_exposure_box::adapters::shodan::ShodanExposureClient;
use shodan_exposure_box::adapters::ui;
use shodan_exposure_box::ports::{
    ConfigProvider, EnvConfigProvider, ExposureSource, SnippetPublisher,
};
use shodan_exposure_box::shared::config::AppConfig;
use shodan_exposure_box::usecases::ReportService;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Render Shodan per-port exposure counts as a bar chart and publish it to a gist.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Locale code of the exposure dataset (e.g. US, DE). Defaults to SHODAN_BOX_LOCALE or US.
    #[arg(short, long)]
    locale: Option<String>,

    /// Render and print the report without publishing it.
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();
    let env_loaded = dotenv();
    init_tracing(cli.verbose);

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load()?;
    let locale = cli.locale.unwrap_or_else(|| cfg.locale_or_default());

    let source: Arc<dyn ExposureSource> =
        Arc::new(ShodanExposureClient::with_base_url(cfg.data_url_or_default()));
    let credentials: Arc<dyn ConfigProvider> = Arc::new(EnvConfigProvider);
    let publisher: Arc<dyn SnippetPublisher> = Arc::new(GistPublisher::with_api_url(
        cfg.github_api_url_or_default(),
        credentials,
    ));
    let service = ReportService::new(source, publisher);

    let mut summary = service.prepare(&locale).await?;
    ui::print_run(&summary)?;

    if cli.dry_run {
        info!("dry run: skipping publish");
    } else {
        service.publish(&mut summary).await?;
    }

    println!(
        "{} executed in {:.2} seconds.",
        env!("CARGO_PKG_NAME"),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
