use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥90 cols: full chrome, roomy side margins
    Medium, // 55-89 cols: full chrome, tight margins
    Narrow, // <55 cols: compact header, no margins
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else if area.width >= 55 {
            LayoutTier::Medium
        } else {
            LayoutTier::Narrow
        }
    }

    /// Horizontal padding applied inside the main content area.
    pub fn side_margin(&self) -> u16 {
        match self {
            LayoutTier::Wide => 6,
            LayoutTier::Medium => 2,
            LayoutTier::Narrow => 0,
        }
    }

    pub fn show_schema_hint(&self, height: u16) -> bool {
        height >= 24 && *self != LayoutTier::Narrow
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        let margin = tier.side_margin();
        let main = Rect {
            x: vertical[1].x + margin,
            y: vertical[1].y,
            width: vertical[1].width.saturating_sub(margin * 2),
            height: vertical[1].height,
        };

        Self {
            header: vertical[0],
            main,
            footer: vertical[2],
            tier,
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 8;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_width() {
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 120, 40)), LayoutTier::Wide);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 70, 40)), LayoutTier::Medium);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 40, 40)), LayoutTier::Narrow);
    }

    #[test]
    fn narrow_main_keeps_full_width() {
        let layout = AppLayout::new(Rect::new(0, 0, 50, 30));
        assert_eq!(layout.main.width, 50);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, area);
        assert!(popup.x + popup.width <= 100);
        assert!(popup.y + popup.height <= 40);
    }

    #[test]
    fn centered_rect_clamps_minimums_to_small_areas() {
        let area = Rect::new(0, 0, 30, 6);
        let popup = centered_rect(50, 50, area);
        assert!(popup.width <= 30);
        assert!(popup.height <= 6);
    }
}
