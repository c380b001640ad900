use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Split an area into header, content and footer rows
///
/// # Arguments
/// * `area` - The full screen area
/// * `header_height` - Rows reserved for the header
/// * `footer_height` - Rows reserved for the footer
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Centered rectangle taking the given percentage of `area`
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, content, footer) = create_standard_layout(area, 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 19);
        assert_eq!(footer.y, 22);
    }

    #[test]
    fn test_center_popup_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = center_popup(area, 50, 50);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 25);
        assert_eq!(popup.x, 25);
        assert!(popup.y >= 12 && popup.bottom() <= 38);
    }
}
