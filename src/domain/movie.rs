use std::collections::HashSet;
use std::fmt;
use std::ops::{Deref, Index};
use std::slice::Iter;
use std::str::FromStr;
use std::vec::IntoIter;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Stable TMDB movie identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(MovieId)
    }
}

impl From<u64> for MovieId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single movie as returned by the now-playing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
}

impl MovieRecord {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            overview: overview.into(),
            backdrop_path: None,
            poster_path: None,
            release_date: None,
            vote_average: None,
            vote_count: None,
        }
    }

    pub fn with_backdrop(mut self, path: impl Into<String>) -> Self {
        self.backdrop_path = Some(path.into());
        self
    }

    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|date| date.year())
    }
}

// TMDB sends "" for unknown release dates; a malformed one only loses the date
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Ok(Some(date)),
            Err(e) => {
                log::warn!("Ignoring unparseable release date {s:?}: {e}");
                Ok(None)
            }
        },
    }
}

/// Ordered movie collection in API response order.
///
/// Index 0 is the banner; everything after it belongs to the slider grid.
/// Duplicate ids are dropped on insert so that id lookups are unambiguous.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<MovieRecord>", into = "Vec<MovieRecord>")]
pub struct MovieList {
    movies: Vec<MovieRecord>,
    ids: HashSet<MovieId>,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a movie, ignoring duplicates.
    /// Returns: true if the movie was actually inserted
    pub fn insert(&mut self, movie: MovieRecord) -> bool {
        if self.ids.insert(movie.id) {
            self.movies.push(movie);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: &MovieId) -> bool {
        self.ids.contains(id)
    }

    /// The featured record shown in the banner
    pub fn banner(&self) -> Option<&MovieRecord> {
        self.movies.first()
    }

    /// Everything except the banner record
    pub fn grid(&self) -> &[MovieRecord] {
        self.movies.get(1..).unwrap_or(&[])
    }

    pub fn get_by_id(&self, id: MovieId) -> Option<&MovieRecord> {
        if !self.contains(&id) {
            return None;
        }
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Finds the record whose id renders to exactly `id`
    pub fn find_by_id_str(&self, id: &str) -> Option<&MovieRecord> {
        self.movies.iter().find(|movie| movie.id.to_string() == id)
    }

    pub fn as_slice(&self) -> &[MovieRecord] {
        &self.movies
    }
}

impl Deref for MovieList {
    type Target = [MovieRecord];

    fn deref(&self) -> &Self::Target {
        &self.movies
    }
}

impl Index<usize> for MovieList {
    type Output = MovieRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.movies[index]
    }
}

impl IntoIterator for MovieList {
    type Item = MovieRecord;
    type IntoIter = IntoIter<MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.into_iter()
    }
}

impl<'a> IntoIterator for &'a MovieList {
    type Item = &'a MovieRecord;
    type IntoIter = Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl FromIterator<MovieRecord> for MovieList {
    fn from_iter<T: IntoIterator<Item = MovieRecord>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<MovieRecord> for MovieList {
    fn extend<T: IntoIterator<Item = MovieRecord>>(&mut self, iter: T) {
        for movie in iter {
            self.insert(movie);
        }
    }
}

impl From<Vec<MovieRecord>> for MovieList {
    fn from(value: Vec<MovieRecord>) -> Self {
        value.into_iter().collect()
    }
}

impl From<MovieList> for Vec<MovieRecord> {
    fn from(value: MovieList) -> Self {
        value.movies
    }
}

impl fmt::Display for MovieList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovieList[{} movies]", self.len())
    }
}
