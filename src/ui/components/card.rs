use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::store::Entry;
use crate::ui::theme::Theme;

pub struct Card<'a> {
    entry: &'a Entry,
    reveal: bool,
    theme: &'a Theme,
}

impl<'a> Card<'a> {
    pub fn new(entry: &'a Entry, reveal: bool, theme: &'a Theme) -> Self {
        Self {
            entry,
            reveal,
            theme,
        }
    }
}

/// Column-align pinyin syllables over their characters. Hanzi occupy two
/// terminal cells; each column is as wide as the longer of the two, plus a
/// gap.
fn aligned_rows(entry: &Entry) -> (String, String) {
    let mut pinyin_row = String::new();
    let mut hanzi_row = String::new();

    for (i, (ch, syllable)) in entry.characters.iter().zip(&entry.pinyin).enumerate() {
        let last = i + 1 == entry.characters.len();
        let syllable_width = syllable.chars().count();
        let col = syllable_width.max(2) + if last { 0 } else { 1 };

        pinyin_row.push_str(syllable);
        for _ in syllable_width..col {
            pinyin_row.push(' ');
        }

        hanzi_row.push(*ch);
        for _ in 2..col {
            hanzi_row.push(' ');
        }
    }

    (pinyin_row, hanzi_row)
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered().border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (pinyin_row, hanzi_row) = aligned_rows(self.entry);

        let mut lines: Vec<Line> = Vec::new();
        if self.reveal {
            lines.push(Line::styled(
                pinyin_row,
                Style::default().fg(colors.pinyin()),
            ));
        } else {
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            hanzi_row,
            Style::default()
                .fg(colors.hanzi())
                .add_modifier(Modifier::BOLD),
        ));
        if self.reveal {
            lines.push(Line::raw(""));
            for meaning in &self.entry.meanings {
                lines.push(Line::styled(
                    meaning.clone(),
                    Style::default().fg(colors.meaning()),
                ));
            }
        }

        // Center the card vertically inside the frame.
        let height = (lines.len() as u16).min(inner.height);
        let top = inner.y + (inner.height - height) / 2;
        let card_area = Rect::new(inner.x, top, inner.width, height);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(card_area, buf);

        // Level badge in the top-right corner.
        let badge = format!("HSK{}", self.entry.level);
        if inner.width > badge.len() as u16 {
            let badge_x = inner.x + inner.width - badge.len() as u16;
            buf.set_string(
                badge_x,
                inner.y,
                &badge,
                Style::default().fg(colors.level_badge()),
            );
        }

        // Keep the reveal hint discoverable while the answer is hidden.
        if !self.reveal && inner.height > 1 {
            let hint = "space to reveal";
            let hint_line = Line::styled(hint, Style::default().fg(colors.hint()));
            Paragraph::new(vec![hint_line])
                .alignment(Alignment::Center)
                .render(
                    Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
                    buf,
                );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hanzi: &str, pinyin: &[&str]) -> Entry {
        Entry {
            id: 0,
            level: 1,
            characters: hanzi.chars().collect(),
            pinyin: pinyin.iter().map(|s| s.to_string()).collect(),
            meanings: vec!["test".to_string()],
        }
    }

    #[test]
    fn test_aligned_rows_single_character() {
        let (pinyin_row, hanzi_row) = aligned_rows(&entry("好", &["hǎo"]));
        assert_eq!(pinyin_row, "hǎo");
        assert_eq!(hanzi_row, "好 ");
    }

    #[test]
    fn test_aligned_rows_columns_match() {
        let (pinyin_row, hanzi_row) = aligned_rows(&entry("时间", &["shí", "jiān"]));
        // Both rows occupy the same number of cells (hanzi are 2 cells wide).
        let pinyin_cells = pinyin_row.chars().count();
        let hanzi_cells = hanzi_row
            .chars()
            .map(|ch| if ch == ' ' { 1 } else { 2 })
            .sum::<usize>();
        assert_eq!(pinyin_cells, hanzi_cells);
        assert!(pinyin_row.starts_with("shí "));
    }

    #[test]
    fn test_short_syllable_still_covers_hanzi_width() {
        // A one-letter syllable must still leave room for the 2-cell hanzi.
        let (pinyin_row, _) = aligned_rows(&entry("阿姨", &["ā", "yí"]));
        assert!(pinyin_row.starts_with("ā  "));
    }
}
