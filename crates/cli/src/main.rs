use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use stockview_core::client::HttpBackendClient;
use stockview_core::config::{InputOptions, Settings};
use stockview_core::location::{PageLocation, Route};
use stockview_core::page::{ComparePage, InputOrchestrator, PageError, ResultPage, SearchOutcome};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod chart;
mod interactive;
mod terminal;

use chart::TextChart;
use terminal::TerminalSurface;

#[derive(Debug, Parser)]
#[command(name = "stockview")]
struct Args {
    /// Prediction backend base URL. Overrides STOCKVIEW_BACKEND_URL.
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open a page location, e.g. `/result?symbol=TCS.NS` or `/compare?A=TCS.NS&B=INFY.NS`.
    Open { location: String },

    /// Run one suggestion search the way the search box does.
    Search { query: String },

    /// Type into the search box line by line; `:help` lists commands.
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(url) = args.backend_url {
        settings.backend_base_url = Some(url);
    }

    let backend = Arc::new(HttpBackendClient::from_settings(&settings)?);
    let surface = Arc::new(TerminalSurface::new());

    match args.command {
        Command::Open { location } => {
            let location = PageLocation::parse(&location)?;
            open_page(&backend, &surface, &location).await;
        }
        Command::Search { query } => {
            let orchestrator =
                InputOrchestrator::new(backend.clone(), surface.clone(), InputOptions::from_env());
            if let SearchOutcome::Rendered(list) = orchestrator.on_input(&query).await {
                tracing::info!(%query, shown = list.items.len(), "search complete");
            }
        }
        Command::Interactive => {
            interactive::run(backend, surface, InputOptions::from_env())
                .await
                .context("interactive session failed")?;
        }
    }

    Ok(())
}

/// Builds a fresh page for `location` and loads it. Page errors are already shown on the
/// surface; here they are only reported.
async fn open_page(
    backend: &Arc<HttpBackendClient>,
    surface: &Arc<TerminalSurface>,
    location: &PageLocation,
) {
    let res = match location.route {
        Route::Result => {
            let page = ResultPage::new(backend.clone(), surface.clone(), Arc::new(TextChart));
            page.open(&location.params).await.map(|_| ())
        }
        Route::Compare => {
            let page = ComparePage::new(backend.clone(), surface.clone());
            page.open(&location.params).await.map(|_| ())
        }
        Route::Home => {
            tracing::info!("home page has no data to load; use `interactive` to search");
            Ok(())
        }
        Route::Unknown => {
            tracing::warn!("unknown page location");
            Ok(())
        }
    };

    if let Err(err) = res {
        capture_page_error(&err);
    }
}

fn capture_page_error(err: &PageError) {
    if let Some((symbol, source)) = reportable_source(err) {
        sentry::with_scope(
            |scope| scope.set_tag("symbol", symbol),
            || sentry_anyhow::capture_anyhow(source),
        );
    }
}

/// Backend failures go to sentry with their original error chain. The rest are user mistakes or
/// log-only.
fn reportable_source(err: &PageError) -> Option<(&str, &anyhow::Error)> {
    match err {
        PageError::FetchFailed { symbol, source }
        | PageError::PartialComparisonFailure { symbol, source, .. } => {
            Some((symbol.as_str(), source))
        }
        PageError::MissingInput { .. }
        | PageError::SearchFailed { .. }
        | PageError::EmptyInput { .. } => None,
    }
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
