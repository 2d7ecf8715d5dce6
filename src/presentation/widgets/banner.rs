use ratatui::{prelude::*, widgets::*};

use crate::domain::{
    image::{image_url, SizeTier},
    movie::MovieRecord,
    text::ellipsize,
};
use crate::presentation::{
    config::styles::Styles,
    widgets::{movie_meta::MovieMeta, shrink_text::ShrinkText},
};

/// What the banner area shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerContent<'a> {
    Loading,
    Failed(&'a str),
    Movie(&'a MovieRecord),
}

/// The headline movie above the slider. Clicking it pages the slider.
pub struct BannerWidget<'a> {
    content: BannerContent<'a>,
    image_base_url: &'a str,
    styles: &'a Styles,
}

impl<'a> BannerWidget<'a> {
    pub fn new(content: BannerContent<'a>, image_base_url: &'a str, styles: &'a Styles) -> Self {
        Self {
            content,
            image_base_url,
            styles,
        }
    }

    fn movie_text(&self, movie: &MovieRecord, inner: Rect) -> Text<'static> {
        let width = inner.width as usize;
        let title_style = self
            .styles
            .get_or("banner.title", Style::default().bold());
        let overview_style = self.styles.get_or("banner.overview", Style::default());
        let hint_style = self
            .styles
            .get_or("banner.hint", Style::default().fg(Color::DarkGray));

        let mut text = Text::from(Line::styled(ellipsize(&movie.title, width), title_style));
        text.extend(Text::from(Line::from(MovieMeta::new(movie))));
        if let Some(path) = &movie.backdrop_path {
            let url = image_url(self.image_base_url, path, SizeTier::Original);
            text.extend(Text::from(Line::styled(
                ellipsize(&url, width),
                Style::default().fg(Color::DarkGray),
            )));
        }

        // Title, meta, URL, blank line and hint around the overview
        let fixed = text.height() + 2;
        let overview_height = (inner.height as usize).saturating_sub(fixed);
        text.extend(Text::raw(""));
        let overview: Text = ShrinkText::new(movie.overview.clone(), width, overview_height).into();
        text.extend(overview.style(overview_style));
        text.extend(Text::from(Line::styled(
            ellipsize("Click or press n for more movies ›", width),
            hint_style,
        )));
        text
    }
}

impl Widget for BannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Now Playing ");
        let inner = block.inner(area);
        block.render(area, buf);

        match self.content {
            BannerContent::Loading => {
                Paragraph::new("Loading now playing movies…")
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            BannerContent::Failed(error) => {
                let error_style = self
                    .styles
                    .get_or("error", Style::default().fg(Color::Red));
                let text = Text::from(vec![
                    Line::styled(format!("Could not load movies: {error}"), error_style),
                    Line::raw("Press r to retry"),
                ]);
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            BannerContent::Movie(movie) => {
                Paragraph::new(self.movie_text(movie, inner)).render(inner, buf);
            }
        }
    }
}
