use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::types::Member;
use crate::ui::theme::Theme;

pub struct MemberList<'a> {
    items: &'a [Member],
    selected: usize,
    theme: &'a Theme,
}

impl<'a> MemberList<'a> {
    pub fn new(items: &'a [Member], selected: usize, theme: &'a Theme) -> Self {
        Self {
            items,
            selected,
            theme,
        }
    }
}

impl Widget for MemberList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Members ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No members listed.",
                Style::default().fg(colors.text_muted()),
            )))
            .render(inner, buf);
            return;
        }

        let name_width = self
            .items
            .iter()
            .map(|m| m.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line> = Vec::with_capacity(self.items.len());
        for (i, member) in self.items.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { "> " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };

            let mut spans = vec![Span::styled(
                format!("{indicator}{:<name_width$}", member.name),
                name_style,
            )];
            if let Some(ref role) = member.role {
                spans.push(Span::styled(
                    format!("  {role}"),
                    Style::default().fg(colors.text_muted()),
                ));
            }
            lines.push(Line::from(spans));
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
