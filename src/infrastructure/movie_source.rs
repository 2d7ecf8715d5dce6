//! Where the now-playing list comes from

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::domain::movie::{MovieList, MovieRecord};
use crate::infrastructure::tmdb::NowPlayingResponse;

pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<MovieList>> + Send + 'a>>;

/// A provider of the now-playing list
pub trait MovieSource: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &str;
    fn fetch_now_playing(&self) -> FetchFuture<'_>;
}

/// Reads a TMDB-shaped JSON document from disk.
///
/// Accepts either the full `now_playing` response or a bare array of
/// results.
pub struct FixtureSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureDocument {
    Response(NowPlayingResponse),
    Results(Vec<MovieRecord>),
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(json: &str) -> Result<MovieList> {
        let document: FixtureDocument =
            serde_json::from_str(json).wrap_err("Fixture is not a now-playing document")?;
        Ok(match document {
            FixtureDocument::Response(response) => response.into_movies(),
            FixtureDocument::Results(results) => results.into_iter().collect(),
        })
    }
}

impl MovieSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch_now_playing(&self) -> FetchFuture<'_> {
        Box::pin(async move {
            let json = tokio::fs::read_to_string(&self.path)
                .await
                .wrap_err_with(|| format!("Failed to read fixture {}", self.path.display()))?;
            Self::parse(&json)
        })
    }
}
