//! # Marquee - now playing in your terminal
//!
//! A terminal home page for movies currently in theatres, fed by TMDB and
//! built with Rust and Ratatui.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** ([`core::state`]): application state
//! - **Message** ([`core::msg`]): events that can change the state
//! - **Update** ([`core::update`]): pure functions that transform state
//! - **Command** ([`core::cmd`]): side effects (network, terminal, logging)
//! - **View** ([`presentation`]): rendering based on the current state
//!
//! Raw terminal and service input ([`core::raw_msg`]) is turned into domain
//! messages by [`core::translator`], which is also where the home page's
//! phase decides which inputs are accepted.
//!
//! ## Example Usage
//!
//! ```rust
//! use marquee::core::{msg::{catalog::CatalogMsg, slider::SliderMsg, Msg}, state::AppState, update::update};
//! use marquee::domain::movie::{MovieList, MovieRecord};
//!
//! let movies: MovieList = (1..=13u64)
//!     .map(|id| MovieRecord::new(id, format!("Movie {id}"), ""))
//!     .collect();
//!
//! let (state, _) = update(Msg::Catalog(CatalogMsg::Loaded(movies)), AppState::default());
//! let (state, _) = update(Msg::Slider(SliderMsg::Advance), state);
//!
//! // The second page of six starts at grid record 6
//! assert_eq!(state.slider.index(), 1);
//! assert_eq!(state.visible_page()[0].title, "Movie 8");
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - movies, pagination, routes and transitions
//! - [`core`] - Elm state machine
//! - [`infrastructure`] - terminal, configuration and TMDB access
//! - [`integration`] - runtime and event loop
//! - [`presentation`] - components, widgets and layout

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
