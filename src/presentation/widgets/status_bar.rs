use ratatui::{prelude::*, widgets::Paragraph};

use crate::presentation::config::styles::Styles;

/// Bottom line: status message on the left, slider position on the right
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    is_error: bool,
    /// Current page and page count, both 1-based
    page: Option<(usize, usize)>,
    styles: &'a Styles,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, styles: &'a Styles) -> Self {
        Self {
            message,
            is_error: false,
            page: None,
            styles,
        }
    }

    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn page(mut self, current: usize, total: usize) -> Self {
        self.page = Some((current, total));
        self
    }

    pub fn page_label(&self) -> String {
        match self.page {
            Some((current, total)) => format!("page {current}/{total} "),
            None => String::new(),
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar_style = self
            .styles
            .get_or("status_bar", Style::default().bg(Color::Black).fg(Color::Gray));
        let message_style = if self.is_error {
            self.styles.get_or("error", Style::default().fg(Color::Red))
        } else {
            Style::default()
        };

        let label = self.page_label();
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(label.chars().count() as u16),
        ])
        .areas(area);

        buf.set_style(area, bar_style);
        Paragraph::new(Span::styled(self.message.unwrap_or_default().to_string(), message_style))
            .render(left, buf);
        Paragraph::new(label)
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(widget: StatusBarWidget<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_status_bar_message_and_page() {
        let styles = Styles::default();
        let line = render(
            StatusBarWidget::new(Some("Loaded 20 movies"), &styles).page(2, 3),
            40,
        );
        assert!(line.starts_with("Loaded 20 movies "));
        assert!(line.ends_with(" page 2/3 "));
        assert_eq!(line.chars().count(), 40);
    }

    #[test]
    fn test_status_bar_empty() {
        let styles = Styles::default();
        let line = render(StatusBarWidget::new(None, &styles), 10);
        assert_eq!(line.trim(), "");
    }

    #[test]
    fn test_error_uses_error_style() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Some("Error: boom"), &styles)
            .error(true)
            .render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }
}
