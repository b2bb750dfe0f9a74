use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::types::Announcement;
use crate::ui::theme::Theme;

/// Announcement list, newest first, with a j/k cursor.
pub struct BulletinList<'a> {
    items: &'a [Announcement],
    selected: usize,
    theme: &'a Theme,
}

impl<'a> BulletinList<'a> {
    pub fn new(items: &'a [Announcement], selected: usize, theme: &'a Theme) -> Self {
        Self {
            items,
            selected,
            theme,
        }
    }
}

impl Widget for BulletinList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Lab's Bulletin ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No announcements yet.",
                Style::default().fg(colors.text_muted()),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::with_capacity(self.items.len() * 3);
        for (i, item) in self.items.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { "> " } else { "  " };
            let title_style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };

            lines.push(Line::from(Span::styled(
                format!("{indicator}{}", item.title),
                title_style,
            )));
            lines.push(Line::from(Span::styled(
                format!("  {} \u{00b7} {}", item.date.format("%d %b %Y"), item.category),
                Style::default().fg(colors.text_muted()),
            )));
            lines.push(Line::from(""));
        }

        // Keep the selected entry visible (3 lines per entry).
        let height = inner.height as usize;
        let selected_line = self.selected * 3;
        let scroll = if height == 0 || selected_line + 2 < height {
            0
        } else {
            (selected_line + 3 - height) as u16
        };

        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }
}

/// Full announcement view, scrollable.
pub struct BulletinDetail<'a> {
    item: &'a Announcement,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> BulletinDetail<'a> {
    pub fn new(item: &'a Announcement, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            item,
            scroll,
            theme,
        }
    }
}

impl Widget for BulletinDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.item.category))
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
            Line::from(Span::styled(
                self.item.date.format("%d %b %Y").to_string(),
                Style::default().fg(colors.text_muted()),
            )),
            Line::from(""),
        ];
        for paragraph in self.item.content.split('\n') {
            lines.push(Line::from(Span::styled(
                paragraph.to_string(),
                Style::default().fg(colors.fg()),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
