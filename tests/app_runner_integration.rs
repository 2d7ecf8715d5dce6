use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use marquee::core::state::{AppState, HomePhase};
use marquee::domain::{movie::MovieId, route::Route};
use marquee::infrastructure::{
    config::Config,
    movie_source::FixtureSource,
    tui::{test::TestTui, Event},
};
use marquee::integration::app_runner::AppRunner;
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/now_playing.json");

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn screen(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

async fn fixture_runner(state: AppState, events: Vec<Event>) -> Result<AppRunner<TestTui>> {
    let tui = TestTui::with_events(90, 41, events)?;
    let mut runner = AppRunner::new(state, Arc::new(FixtureSource::new(FIXTURE)), tui)?;
    runner.start()?;
    runner.await_service_reply(Duration::from_secs(5)).await?;
    Ok(runner)
}

fn fresh_state() -> AppState {
    AppState::new_with_config(Config::embedded().unwrap_or_default())
}

#[tokio::test]
async fn fixture_loads_banner_and_first_page() -> Result<()> {
    let mut runner = fixture_runner(fresh_state(), vec![Event::Render]).await?;
    runner.event_loop().await?;

    assert_eq!(runner.state().phase(), HomePhase::ReadyNoOverlay);
    let banner = runner.state().movies().and_then(|list| list.banner()).map(|m| m.id);
    assert_eq!(banner, Some(MovieId(693134)));

    let screen = screen(runner.tui().buffer());
    assert!(screen.contains("Dune: Part Two"), "{screen}");
    assert!(screen.contains("Inception"), "{screen}");
    runner.shutdown().await
}

#[tokio::test]
async fn deep_link_opens_detail_once_loaded() -> Result<()> {
    let state = fresh_state().with_route(Route::parse("/movies/27205")?);
    let mut runner = fixture_runner(state, vec![Event::Render]).await?;
    runner.event_loop().await?;

    assert_eq!(runner.state().phase(), HomePhase::ReadyOverlayOpen);
    let selected = runner.state().selected_movie().map(|m| m.title.clone());
    assert_eq!(selected.as_deref(), Some("Inception"));

    // Back returns to the home route underneath
    runner.tui_mut().enqueue_event(key(KeyCode::Esc));
    runner.event_loop().await?;
    assert_eq!(runner.state().phase(), HomePhase::ReadyNoOverlay);
    assert_eq!(runner.state().router.current(), &Route::Home);
    runner.shutdown().await
}

#[tokio::test]
async fn next_key_pages_through_fixture() -> Result<()> {
    let mut runner = fixture_runner(fresh_state(), vec![key(KeyCode::Char('n'))]).await?;
    runner.event_loop().await?;
    assert_eq!(runner.state().slider.index(), 1);

    let ids: Vec<u64> = runner.state().visible_page().iter().map(|m| m.id.0).collect();
    assert_eq!(ids.len(), 6);
    assert!(!ids.contains(&27205));
    runner.shutdown().await
}

#[tokio::test]
async fn missing_fixture_lands_in_failed_phase() -> Result<()> {
    let tui = TestTui::with_events(90, 41, vec![Event::Render])?;
    let source = Arc::new(FixtureSource::new("/definitely/not/here.json"));
    let mut runner = AppRunner::new(fresh_state(), source, tui)?;
    runner.start()?;
    runner.await_service_reply(Duration::from_secs(5)).await?;
    runner.event_loop().await?;

    assert_eq!(runner.state().phase(), HomePhase::Failed);
    let screen = screen(runner.tui().buffer());
    assert!(screen.contains("Press r to retry"), "{screen}");
    runner.shutdown().await
}
