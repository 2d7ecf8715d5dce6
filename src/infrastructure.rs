//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - TMDB client and fixture-backed movie sources
//! - The background movie service

pub mod cli;
pub mod config;
pub mod movie_service;
pub mod movie_source;
pub mod tmdb;
pub mod tui;
