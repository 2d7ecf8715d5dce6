//! Domain logic
//!
//! This module contains the movie browsing rules, free of any I/O:
//! - Movie records and lists
//! - Slider pagination and the transition latch
//! - Route parsing and detail selection
//! - Transition descriptors and tweens
//! - Text layout helpers

pub mod image;
pub mod latch;
pub mod movie;
pub mod pagination;
pub mod route;
pub mod selection;
pub mod text;
pub mod transition;
pub mod ui;
