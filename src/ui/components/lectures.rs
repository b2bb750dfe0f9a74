use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::types::Lecture;
use crate::ui::theme::Theme;

pub struct LectureList<'a> {
    items: &'a [Lecture],
    selected: usize,
    theme: &'a Theme,
}

impl<'a> LectureList<'a> {
    pub fn new(items: &'a [Lecture], selected: usize, theme: &'a Theme) -> Self {
        Self {
            items,
            selected,
            theme,
        }
    }
}

impl Widget for LectureList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Lectures ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No lecture materials yet.",
                Style::default().fg(colors.text_muted()),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::with_capacity(self.items.len() * 2);
        for (i, item) in self.items.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            lines.push(Line::from(Span::styled(
                format!("{indicator}{:>2}. {}", i + 1, item.title),
                style,
            )));
        }

        let height = inner.height as usize;
        let scroll = if height == 0 || self.selected < height {
            0
        } else {
            (self.selected + 1 - height) as u16
        };

        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }
}

pub struct LectureDetail<'a> {
    item: &'a Lecture,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> LectureDetail<'a> {
    pub fn new(item: &'a Lecture, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            item,
            scroll,
            theme,
        }
    }
}

impl Widget for LectureDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Lecture ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                self.item.title.clone(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(ref description) = self.item.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(colors.fg()),
            )));
            lines.push(Line::from(""));
        }

        if !self.item.topics.is_empty() {
            lines.push(Line::from(Span::styled(
                "Topics",
                Style::default()
                    .fg(colors.accent_alt())
                    .add_modifier(Modifier::BOLD),
            )));
            for topic in &self.item.topics {
                lines.push(Line::from(Span::styled(
                    format!("  \u{2022} {topic}"),
                    Style::default().fg(colors.fg()),
                )));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
