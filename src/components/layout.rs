//! Layout calculations for the dashboard grid

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrowest terminal width that still fits four cards side by side
pub const WIDE_BREAKPOINT: u16 = 96;

const CARD_HEIGHT: u16 = 7;
const TILE_HEIGHT: u16 = 5;

/// Screen regions of the dashboard, top to bottom
pub struct DashboardLayout {
    pub header: Rect,
    /// Four goal cards, left to right then top to bottom
    pub cards: Vec<Rect>,
    pub chart: Rect,
    /// Four info tiles in the same order as the cards
    pub tiles: Vec<Rect>,
    pub nutrition: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the dashboard layout for the current terminal size.
///
/// Wide terminals get the cards and tiles in single rows of four; anything
/// under [`WIDE_BREAKPOINT`] wraps both into two-by-two grids.
pub fn calculate_dashboard_layout(area: Rect) -> DashboardLayout {
    let rows: u16 = if area.width >= WIDE_BREAKPOINT { 1 } else { 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(CARD_HEIGHT * rows),
            Constraint::Min(9),
            Constraint::Length(TILE_HEIGHT * rows),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    DashboardLayout {
        header: chunks[0],
        cards: grid(chunks[1], rows as usize),
        chart: chunks[2],
        tiles: grid(chunks[3], rows as usize),
        nutrition: chunks[4],
        help: chunks[5],
    }
}

/// Split an area into four cells over the given number of rows
fn grid(area: Rect, rows: usize) -> Vec<Rect> {
    let columns = 4 / rows;

    let row_constraints: Vec<Constraint> =
        (0..rows).map(|_| Constraint::Ratio(1, rows as u32)).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let mut cells = Vec::with_capacity(4);
    for row in row_areas.iter() {
        let column_constraints: Vec<Constraint> = (0..columns)
            .map(|_| Constraint::Ratio(1, columns as u32))
            .collect();
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints)
            .split(*row);
        cells.extend(column_areas.iter().copied());
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_puts_cards_in_one_row() {
        let layout = calculate_dashboard_layout(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.cards.len(), 4);
        assert!(layout.cards.iter().all(|c| c.y == layout.cards[0].y));
        assert!(layout.cards[0].x < layout.cards[1].x);
        assert!(layout.cards[2].x < layout.cards[3].x);
    }

    #[test]
    fn test_narrow_layout_wraps_into_two_rows() {
        let layout = calculate_dashboard_layout(Rect::new(0, 0, 60, 50));

        assert_eq!(layout.cards.len(), 4);
        assert_eq!(layout.cards[0].y, layout.cards[1].y);
        assert!(layout.cards[2].y > layout.cards[0].y);
        assert_eq!(layout.tiles[2].y, layout.tiles[3].y);
    }

    #[test]
    fn test_regions_stack_without_gaps() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_dashboard_layout(area);

        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.header.height, 3);
        assert!(layout.chart.height >= 9);
        assert_eq!(layout.help.height, 1);
        assert_eq!(layout.help.bottom(), area.bottom());
    }

    #[test]
    fn test_centered_popup_is_centered() {
        let popup = centered_popup(Rect::new(0, 0, 100, 40), 44, 8);

        assert_eq!(popup, Rect::new(28, 16, 44, 8));
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let popup = centered_popup(Rect::new(0, 0, 30, 6), 44, 8);

        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 6);
    }

    #[test]
    fn test_centered_popup_respects_area_origin() {
        let popup = centered_popup(Rect::new(10, 5, 40, 20), 20, 10);

        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }
}
