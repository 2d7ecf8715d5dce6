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

/// Expanded view of the routed movie
pub struct DetailPanel<'a> {
    movie: &'a MovieRecord,
    image_base_url: &'a str,
    styles: &'a Styles,
}

impl<'a> DetailPanel<'a> {
    pub fn new(movie: &'a MovieRecord, image_base_url: &'a str, styles: &'a Styles) -> Self {
        Self {
            movie,
            image_base_url,
            styles,
        }
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let panel_style = self.styles.get_or("overlay.panel", Style::default());
        let title_style = self
            .styles
            .get_or("overlay.title", Style::default().bold());
        let meta_style = self
            .styles
            .get_or("overlay.meta", Style::default().fg(Color::Gray));

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .style(panel_style)
            .title_bottom(Line::from(" esc to close ").right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let mut text = Text::from(Line::styled(ellipsize(&self.movie.title, width), title_style));
        text.extend(Text::from(
            Line::from(MovieMeta::new(self.movie)).style(meta_style),
        ));
        if let Some(path) = &self.movie.backdrop_path {
            let url = image_url(self.image_base_url, path, SizeTier::W500);
            text.extend(Text::from(Line::styled(ellipsize(&url, width), meta_style)));
        }
        text.extend(Text::raw(""));

        let overview_height = (inner.height as usize).saturating_sub(text.height());
        let overview: Text = ShrinkText::new(self.movie.overview.clone(), width, overview_height).into();
        text.extend(overview);

        Paragraph::new(text).render(inner, buf);
    }
}
