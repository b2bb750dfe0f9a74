use std::collections::HashSet;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::quiz::scorer::{self, QuestionResult};
use crate::ui::theme::Theme;

/// Score summary shown at the top of the result screen.
pub struct ScoreCard<'a> {
    correct: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> ScoreCard<'a> {
    pub fn new(correct: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            correct,
            total,
            theme,
        }
    }
}

impl Widget for ScoreCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Result ")
            .border_style(Style::default().fg(colors.accent_alt()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                format!("{}/{}", self.correct, self.total),
                Style::default()
                    .fg(colors.accent_alt())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                scorer::score_message(self.correct, self.total),
                Style::default().fg(colors.fg()),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Collapsible per-question review cards. Any number of cards may be
/// expanded at once; the selected card follows the j/k cursor.
pub struct ReviewList<'a> {
    results: &'a [QuestionResult],
    expanded: &'a HashSet<usize>,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> ReviewList<'a> {
    pub fn new(
        results: &'a [QuestionResult],
        expanded: &'a HashSet<usize>,
        selected: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            results,
            expanded,
            selected,
            theme,
        }
    }

    fn card_lines(&self, result: &QuestionResult) -> Vec<Line<'static>> {
        let colors = &self.theme.colors;
        let index = result.question_index;
        let is_selected = index == self.selected;
        let is_expanded = self.expanded.contains(&index);

        let marker = if is_expanded { "\u{25be}" } else { "\u{25b8}" };
        let header_style = if is_selected {
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg())
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{marker} Question {} ", index + 1), header_style),
            Span::styled(
                result.title.clone(),
                Style::default().fg(colors.text_muted()),
            ),
        ])];

        if is_expanded {
            let user_style = if result.is_correct {
                Style::default().fg(colors.success())
            } else {
                Style::default().fg(colors.error())
            };
            lines.push(Line::from(vec![
                Span::styled("    Your answer:    ", Style::default().fg(colors.text_muted())),
                Span::styled(result.user_answer.join(" "), user_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled("    Correct answer: ", Style::default().fg(colors.text_muted())),
                Span::styled(
                    result.correct_answer.join(" "),
                    Style::default().fg(colors.success()),
                ),
            ]));
            let (badge, badge_style) = if result.is_correct {
                ("    \u{2713} Correct", Style::default().fg(colors.success()))
            } else {
                ("    \u{2717} Incorrect", Style::default().fg(colors.error()))
            };
            lines.push(Line::from(Span::styled(badge, badge_style)));
        }

        lines.push(Line::from(""));
        lines
    }
}

impl Widget for ReviewList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Question Review ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        let mut selected_line = 0;
        for result in self.results {
            if result.question_index == self.selected {
                selected_line = lines.len();
            }
            lines.extend(self.card_lines(result));
        }

        // Scroll just enough to keep the selected card's header visible.
        let height = inner.height as usize;
        let scroll = if height == 0 || selected_line < height {
            0
        } else {
            (selected_line + 1 - height) as u16
        };

        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }
}
