use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

/// Row of numbered question boxes: the current question is highlighted,
/// answered questions are filled, the rest show as outlines. Jump targets
/// match the digit keys.
pub struct QuestionNav<'a> {
    current: usize,
    answered: Vec<bool>,
    theme: &'a Theme,
}

impl<'a> QuestionNav<'a> {
    pub fn new(current: usize, answered: Vec<bool>, theme: &'a Theme) -> Self {
        Self {
            current,
            answered,
            theme,
        }
    }
}

impl Widget for QuestionNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans: Vec<Span> = Vec::with_capacity(self.answered.len() * 2);
        for (i, &answered) in self.answered.iter().enumerate() {
            let label = format!(" {} ", i + 1);
            let style = if i == self.current {
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.accent_dim())
                    .add_modifier(Modifier::BOLD)
            } else if answered {
                Style::default()
                    .fg(colors.answered_fg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_muted())
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
