//! Routes understood by the in-process router

use std::fmt;
use std::str::FromStr;

use color_eyre::eyre::{eyre, Report};
use lazy_static::lazy_static;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieId;

lazy_static! {
    static ref MOVIE_ROUTE: Regex = Regex::new(r"^/movies/([^/]+)/?$").expect("valid route pattern");
}

/// A location in the app. Mirrors `/` and `/movies/:movieId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    /// Detail route; the raw `movieId` path parameter
    Movie(String),
}

impl Route {
    pub fn movie(id: MovieId) -> Self {
        Route::Movie(id.to_string())
    }

    /// The `movieId` parameter, when this is a detail route
    pub fn movie_id(&self) -> Option<&str> {
        match self {
            Route::Home => None,
            Route::Movie(id) => Some(id.as_str()),
        }
    }

    pub fn parse(path: &str) -> Result<Self, Report> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Ok(Route::Home);
        }

        let captures = MOVIE_ROUTE
            .captures(path)
            .ok_or_else(|| eyre!("Unknown route: {path}"))?;
        let (_, [raw_id]) = captures.extract();
        let id = percent_decode_str(raw_id)
            .decode_utf8()
            .map_err(|e| eyre!("Invalid route parameter in {path}: {e}"))?;
        Ok(Route::Movie(id.into_owned()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Movie(id) => write!(f, "/movies/{}", utf8_percent_encode(id, NON_ALPHANUMERIC)),
        }
    }
}

impl FromStr for Route {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("/", Route::Home)]
    #[case("", Route::Home)]
    #[case("/movies/27205", Route::Movie("27205".into()))]
    #[case("/movies/27205/", Route::Movie("27205".into()))]
    #[case("/movies/a%20b", Route::Movie("a b".into()))]
    fn test_parse(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::parse(path).ok(), Some(expected));
    }

    #[rstest]
    #[case("/movies")]
    #[case("/movies/")]
    #[case("/tv/1")]
    #[case("/movies/1/extra")]
    fn test_parse_rejects_unknown(#[case] path: &str) {
        assert!(Route::parse(path).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(Route::movie(MovieId(27205)).to_string(), "/movies/27205");
        assert_eq!(Route::Movie("a b".into()).to_string(), "/movies/a%20b");
    }

    #[test]
    fn test_movie_id_param() {
        assert_eq!(Route::Home.movie_id(), None);
        assert_eq!(Route::movie(MovieId(550)).movie_id(), Some("550"));
    }
}
