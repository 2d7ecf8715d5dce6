//! Reusable UI widgets
//!
//! Widgets are plain ratatui `Widget`s built from borrowed domain data;
//! they never read `AppState` themselves.

pub mod banner;
pub mod detail_panel;
pub mod movie_card;
pub mod movie_meta;
pub mod shrink_text;
pub mod status_bar;
