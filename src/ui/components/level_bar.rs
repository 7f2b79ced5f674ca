use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::range::{LevelRange, MAX_LEVEL, MIN_LEVEL};
use crate::ui::theme::Theme;

pub struct LevelBar<'a> {
    range: LevelRange,
    theme: &'a Theme,
}

impl<'a> LevelBar<'a> {
    pub fn new(range: LevelRange, theme: &'a Theme) -> Self {
        Self { range, theme }
    }
}

impl Widget for LevelBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" levels ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut spans: Vec<Span> = Vec::new();
        for level in MIN_LEVEL..=MAX_LEVEL {
            let style = if self.range.contains(level) {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.accent_dim())
            };
            spans.push(Span::styled(format!(" {level} "), style));
        }
        spans.push(Span::styled(
            format!("   HSK {}-{}", self.range.min(), self.range.max()),
            Style::default().fg(colors.fg()),
        ));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
