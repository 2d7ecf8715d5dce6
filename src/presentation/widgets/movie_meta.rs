use ratatui::prelude::*;
use thousands::Separable;

use crate::domain::movie::MovieRecord;

/// `2010 · ★ 8.4 · 35,123 votes`, skipping whatever is unknown
pub struct MovieMeta {
    year: Option<i32>,
    vote_average: Option<f64>,
    vote_count: Option<u64>,
}

impl MovieMeta {
    pub fn new(movie: &MovieRecord) -> Self {
        Self {
            year: movie.release_year(),
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
        }
    }

    fn parts(&self) -> Vec<Span<'static>> {
        let mut parts = Vec::new();
        if let Some(year) = self.year {
            parts.push(Span::raw(year.to_string()));
        }
        if let Some(average) = self.vote_average {
            parts.push(Span::styled(
                format!("★ {average:.1}"),
                Style::default().fg(Color::LightYellow),
            ));
        }
        if let Some(count) = self.vote_count {
            parts.push(Span::raw(format!("{} votes", count.separate_with_commas())));
        }
        parts
    }
}

impl From<MovieMeta> for Line<'_> {
    fn from(value: MovieMeta) -> Self {
        let mut spans = Vec::new();
        for (i, part) in value.parts().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" · "));
            }
            spans.push(part);
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_full_meta() {
        let mut movie = MovieRecord::new(27205, "Inception", "");
        movie.release_date = NaiveDate::from_ymd_opt(2010, 7, 15);
        movie.vote_average = Some(8.369);
        movie.vote_count = Some(35123);

        let line: Line = MovieMeta::new(&movie).into();
        assert_eq!(line.to_string(), "2010 · ★ 8.4 · 35,123 votes");
    }

    #[test]
    fn test_partial_meta() {
        let mut movie = MovieRecord::new(1, "Untitled", "");
        movie.vote_count = Some(12);

        let line: Line = MovieMeta::new(&movie).into();
        assert_eq!(line.to_string(), "12 votes");
    }

    #[test]
    fn test_empty_meta() {
        let line: Line = MovieMeta::new(&MovieRecord::new(1, "Untitled", "")).into();
        assert_eq!(line.to_string(), "");
    }
}
