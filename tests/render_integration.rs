use color_eyre::Result;
use crossterm::event::KeyCode;
use marquee::core::msg::{catalog::CatalogMsg, Msg};
use marquee::core::raw_msg::RawMsg;
use marquee::core::state::AppState;
use marquee::presentation::components::Components;
use marquee::test_helpers::HomeTestHelper;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn draw(state: &AppState, width: u16, height: u16) -> Result<Buffer> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    let components = Components::new();
    terminal.draw(|frame| components.render(frame, state))?;
    Ok(terminal.backend().buffer().clone())
}

fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

fn contains(buffer: &Buffer, needle: &str) -> bool {
    rows(buffer).iter().any(|row| row.contains(needle))
}

#[test]
fn loading_phase_shows_placeholder() -> Result<()> {
    let mut home = HomeTestHelper::new();
    home.send(Msg::Catalog(CatalogMsg::Load));

    let buffer = draw(home.state(), 90, 41)?;
    assert!(contains(&buffer, "Loading now playing"));
    assert!(!contains(&buffer, "page "));
    Ok(())
}

#[test]
fn failed_phase_offers_retry() -> Result<()> {
    let mut home = HomeTestHelper::new();
    home.send(Msg::Catalog(CatalogMsg::Load))
        .raw(RawMsg::NowPlayingFailed("timed out".to_string()));

    let buffer = draw(home.state(), 90, 41)?;
    assert!(contains(&buffer, "Could not load movies: timed out"));
    assert!(contains(&buffer, "Press r to retry"));
    assert!(contains(&buffer, "Error: timed out"));
    Ok(())
}

#[test]
fn ready_phase_draws_banner_cards_and_page_label() -> Result<()> {
    let home = HomeTestHelper::loaded(13);

    let buffer = draw(home.state(), 90, 41)?;
    let screen = rows(&buffer);
    let last = screen.last().cloned().unwrap_or_default();
    assert!(last.contains("Loaded 13 movies"), "{last}");
    assert!(last.trim_end().ends_with("page 1/2"), "{last}");

    assert!(contains(&buffer, "Movie 1"));
    for id in 2..=7 {
        assert!(contains(&buffer, &format!("Movie {id}")), "card {id} missing");
    }
    assert!(!contains(&buffer, "Movie 8"));
    Ok(())
}

#[test]
fn second_page_after_settle() -> Result<()> {
    let mut home = HomeTestHelper::loaded(13);
    home.key(KeyCode::Char('n')).settle();

    let buffer = draw(home.state(), 90, 41)?;
    assert!(contains(&buffer, "Movie 8"));
    assert!(contains(&buffer, "Movie 13"));
    assert!(contains(&buffer, "page 2/2"));
    Ok(())
}

#[test]
fn open_overlay_draws_detail_panel() -> Result<()> {
    let mut home = HomeTestHelper::loaded(13);
    home.click_card(4).settle();

    let buffer = draw(home.state(), 100, 41)?;
    assert!(contains(&buffer, "esc to close"));
    assert!(contains(&buffer, "Overview of movie 4."));
    assert!(contains(&buffer, "/w500/backdrop-4.jpg"));

    home.key(KeyCode::Esc).settle();
    let buffer = draw(home.state(), 100, 41)?;
    assert!(!contains(&buffer, "esc to close"));
    Ok(())
}

#[test]
fn tiny_terminal_does_not_panic() -> Result<()> {
    let mut home = HomeTestHelper::loaded(13);
    draw(home.state(), 10, 3)?;
    home.click_card(2).settle();
    draw(home.state(), 4, 2)?;
    Ok(())
}
