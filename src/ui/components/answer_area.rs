use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::quiz::packer::{self, ChipMetrics, MIN_ANSWER_ROWS};
use crate::ui::theme::Theme;

/// The answer being assembled: selected tokens as chips, wrapped into rows
/// by the packer, over underlined placeholder slots. At least
/// `MIN_ANSWER_ROWS` slots always show, so an empty answer still reads as
/// fill-in-the-blanks.
pub struct AnswerArea<'a> {
    selected: &'a [String],
    cursor: Option<usize>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> AnswerArea<'a> {
    pub fn new(
        selected: &'a [String],
        cursor: Option<usize>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            selected,
            cursor,
            focused,
            theme,
        }
    }

    /// Rows the widget will draw for a given inner width, placeholder rows
    /// included. Callers size the surrounding constraint with this.
    pub fn row_count(selected: &[String], inner_width: u16) -> usize {
        packer::pack(selected, inner_width as f32, ChipMetrics::default())
            .len()
            .max(MIN_ANSWER_ROWS)
    }
}

impl Widget for AnswerArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(" Answer ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = packer::pack(self.selected, inner.width as f32, ChipMetrics::default());
        let row_count = rows.len().max(MIN_ANSWER_ROWS);

        let underline: String = "\u{2500}".repeat(inner.width as usize);
        let mut lines: Vec<Line> = Vec::with_capacity(row_count * 2);

        for row_index in 0..row_count {
            let mut spans: Vec<Span> = Vec::new();
            if let Some(row) = rows.get(row_index) {
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
                        Style::default().fg(colors.chip_fg())
                    };
                    spans.push(Span::styled(format!("[ {} ]", chip.token), style));
                }
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(Span::styled(
                underline.clone(),
                Style::default().fg(colors.text_muted()),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
