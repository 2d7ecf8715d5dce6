//! Fixtures and a fluent driver for exercising the home page without a terminal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
        update::update,
    },
    domain::{
        movie::{MovieId, MovieList, MovieRecord},
        ui::HitTarget,
    },
    infrastructure::config::Config,
};

pub fn sample_movie(id: u64) -> MovieRecord {
    MovieRecord::new(id, format!("Movie {id}"), format!("Overview of movie {id}."))
        .with_backdrop(format!("/backdrop-{id}.jpg"))
}

/// Movies with ids `1..=count`; id 1 is the banner
pub fn sample_movies(count: u64) -> MovieList {
    (1..=count).map(sample_movie).collect()
}

/// Drives `AppState` through translate and update the way the runtime does,
/// minus command execution
pub struct HomeTestHelper {
    state: AppState,
}

impl HomeTestHelper {
    /// Fresh state using the embedded configuration
    pub fn new() -> Self {
        let config = Config::embedded().unwrap_or_default();
        Self {
            state: AppState::new_with_config(config),
        }
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// State with `count` sample movies loaded
    pub fn loaded(count: u64) -> Self {
        let mut helper = Self::new();
        helper.raw(RawMsg::NowPlayingLoaded(sample_movies(count)));
        helper
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Sends a domain message straight to update
    pub fn send(&mut self, msg: Msg) -> &mut Self {
        let state = std::mem::take(&mut self.state);
        let (state, _) = update(msg, state);
        self.state = state;
        self
    }

    /// Translates and applies a raw message
    pub fn raw(&mut self, raw: RawMsg) -> &mut Self {
        for msg in translate_raw_to_domain(raw, &self.state) {
            self.send(msg);
        }
        self
    }

    pub fn key(&mut self, code: KeyCode) -> &mut Self {
        self.raw(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn click(&mut self, target: HitTarget) -> &mut Self {
        self.raw(RawMsg::Click(target))
    }

    pub fn click_banner(&mut self) -> &mut Self {
        self.click(HitTarget::Banner)
    }

    pub fn click_card(&mut self, id: u64) -> &mut Self {
        self.click(HitTarget::Card(MovieId(id)))
    }

    /// Advances animations by `elapsed_ms`
    pub fn frame(&mut self, elapsed_ms: u64) -> &mut Self {
        self.raw(RawMsg::Frame { elapsed_ms })
    }

    /// Plays every running animation to the end
    pub fn settle(&mut self) -> &mut Self {
        self.frame(60_000)
    }

    pub fn page_index(&self) -> usize {
        self.state.slider.index()
    }

    pub fn visible_ids(&self) -> Vec<u64> {
        self.state.visible_page().iter().map(|movie| movie.id.0).collect()
    }
}

impl Default for HomeTestHelper {
    fn default() -> Self {
        Self::new()
    }
}
