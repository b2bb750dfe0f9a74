use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::quiz::packer::{self, ChipMetrics};
use crate::ui::theme::Theme;

/// The shuffled bank of unplaced tokens, flow-wrapped with the same packer
/// the answer area uses.
pub struct TokenBank<'a> {
    tokens: &'a [String],
    cursor: Option<usize>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TokenBank<'a> {
    pub fn new(
        tokens: &'a [String],
        cursor: Option<usize>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            tokens,
            cursor,
            focused,
            theme,
        }
    }
}

impl Widget for TokenBank<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(" Tokens ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.tokens.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "all tokens placed",
                Style::default().fg(colors.text_muted()),
            )))
            .render(inner, buf);
            return;
        }

        let rows = packer::pack(self.tokens, inner.width as f32, ChipMetrics::default());
        let mut lines: Vec<Line> = Vec::with_capacity(rows.len());

        for row in &rows {
            let mut spans: Vec<Span> = Vec::new();
            for (pos, chip) in row.iter().enumerate() {
                if pos > 0 {
                    spans.push(Span::raw(" "));
                }
                let highlighted = self.focused && self.cursor == Some(chip.original_index);
                let style = if highlighted {
                    Style::default()
                        .fg(colors.chip_cursor_fg())
                        .bg(colors.chip_cursor_bg())
                } else {
                    Style::default().fg(colors.fg())
                };
                spans.push(Span::styled(format!("[ {} ]", chip.token), style));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
