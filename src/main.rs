use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use marquee::{
    core::state::AppState,
    domain::route::Route,
    infrastructure::{
        cli::Cli,
        config::Config,
        movie_source::{FixtureSource, MovieSource},
        tmdb::TmdbClient,
        tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let mut state = AppState::new_with_config(config.clone());
    if let Some(route) = &args.route {
        state = state.with_route(Route::parse(route)?);
    }

    let source: Arc<dyn MovieSource> = match &args.fixture {
        Some(path) => Arc::new(FixtureSource::new(path)),
        None => Arc::new(TmdbClient::new(&config.tmdb)?),
    };
    log::info!("Fetching now-playing movies from {}", source.name());

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate)
        .mouse(!args.no_mouse);
    let mut runner = AppRunner::new(state, source, tui)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
