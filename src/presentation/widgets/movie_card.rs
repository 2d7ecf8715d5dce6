use ratatui::{prelude::*, widgets::*};

use crate::domain::{movie::MovieRecord, text};
use crate::presentation::{config::styles::Styles, widgets::movie_meta::MovieMeta};

/// One slot in the slider grid
pub struct MovieCard<'a> {
    movie: &'a MovieRecord,
    styles: &'a Styles,
    focused: bool,
    /// Hover emphasis progress in `[0, 1]`
    emphasis: f64,
    /// Caption reveal progress in `[0, 1]`
    caption: f64,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a MovieRecord, styles: &'a Styles) -> Self {
        Self {
            movie,
            styles,
            focused: false,
            emphasis: 0.0,
            caption: 0.0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn emphasis(mut self, progress: f64) -> Self {
        self.emphasis = progress;
        self
    }

    pub fn caption(mut self, progress: f64) -> Self {
        self.caption = progress;
        self
    }

    /// Number of caption lines to show out of `available`
    pub fn caption_lines(&self, available: usize) -> usize {
        (available as f64 * self.caption.clamp(0.0, 1.0)).ceil() as usize
    }
}

impl Widget for MovieCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = self.styles.get_or("card", Style::default());
        let style = if self.focused {
            self.styles
                .get_or("card.focused", Style::default().fg(Color::Yellow))
        } else {
            base
        };
        // Fully hovered cards get the heavier frame
        let border_type = if self.focused && self.emphasis >= 1.0 {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::bordered().border_type(border_type).border_style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let mut lines = vec![
            Line::styled(text::ellipsize(&self.movie.title, width), style.bold()),
            Line::from(MovieMeta::new(self.movie)),
        ];

        let available = (inner.height as usize).saturating_sub(lines.len());
        let shown = self.caption_lines(available);
        if shown > 0 {
            let caption_style = self
                .styles
                .get_or("card.caption", Style::default().fg(Color::Gray));
            let wrapped = text::wrap_words(&self.movie.overview, width);
            lines.extend(
                text::truncate_text(&wrapped, shown)
                    .lines()
                    .map(|line| Line::styled(line.to_string(), caption_style)),
            );
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn render(card: MovieCard<'_>, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_card_title_and_border() {
        let styles = Styles::default();
        let movie = MovieRecord::new(27205, "Inception", "Cobb steals secrets.");
        let buf = render(MovieCard::new(&movie, &styles), Rect::new(0, 0, 20, 6));

        assert!(row(&buf, 0).starts_with('╭'));
        assert!(row(&buf, 1).contains("Inception"));
        assert!(!row(&buf, 3).contains("Cobb"));
    }

    #[test]
    fn test_card_caption_revealed() {
        let styles = Styles::default();
        let movie = MovieRecord::new(27205, "Inception", "Cobb steals secrets.");
        let card = MovieCard::new(&movie, &styles)
            .focused(true)
            .emphasis(1.0)
            .caption(1.0);
        let buf = render(card, Rect::new(0, 0, 24, 6));

        assert!(row(&buf, 0).starts_with('┏'));
        assert!(row(&buf, 3).contains("Cobb steals secrets."));
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.1, 1)]
    #[case(0.5, 2)]
    #[case(1.0, 4)]
    fn test_caption_lines(#[case] progress: f64, #[case] expected: usize) {
        let styles = Styles::default();
        let movie = MovieRecord::new(1, "A", "");
        let card = MovieCard::new(&movie, &styles).caption(progress);
        assert_eq!(card.caption_lines(4), expected);
    }

    #[test]
    fn test_card_long_title_is_ellipsized() {
        let styles = Styles::default();
        let movie = MovieRecord::new(1, "Everything Everywhere All at Once", "");
        let buf = render(MovieCard::new(&movie, &styles), Rect::new(0, 0, 12, 4));
        assert_eq!(row(&buf, 1), "│Everythin…│");
    }
}
