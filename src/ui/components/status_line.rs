use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::engine::weights::Feedback;
use crate::ui::theme::Theme;

const HINTS: &str =
    "space reveal · enter next · backspace prev · ↑/↓ mark · 1-6 max · [/] min · q quit";

pub struct StatusLine<'a> {
    position: usize,
    history_len: usize,
    /// Current entry's sampling weight, shown so the practice bias is visible.
    weight: Option<u32>,
    pending: Feedback,
    status: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(
        position: usize,
        history_len: usize,
        weight: Option<u32>,
        pending: Feedback,
        status: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            position,
            history_len,
            weight,
            pending,
            status,
            theme,
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans = vec![Span::styled(
            format!(" {}/{}", self.position, self.history_len),
            Style::default().fg(colors.fg()),
        )];

        if let Some(weight) = self.weight {
            spans.push(Span::styled(
                format!("  w={weight}"),
                Style::default().fg(colors.hint()),
            ));
        }

        match self.pending {
            Feedback::Increase => spans.push(Span::styled(
                "  ↑ more practice",
                Style::default().fg(colors.marker_more()),
            )),
            Feedback::Decrease => spans.push(Span::styled(
                "  ↓ less practice",
                Style::default().fg(colors.marker_less()),
            )),
            Feedback::Neutral => {}
        }

        if let Some(status) = self.status {
            spans.push(Span::styled(
                format!("  {status}"),
                Style::default().fg(colors.error()),
            ));
        }

        Paragraph::new(Line::from(spans)).render(Rect::new(area.x, area.y, area.width, 1), buf);

        if area.height > 1 {
            let hints = Line::styled(format!(" {HINTS}"), Style::default().fg(colors.hint()));
            Paragraph::new(hints).render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
        }
    }
}
