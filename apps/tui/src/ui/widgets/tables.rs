/// First row to show so the selected row stays inside the visible window.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || max_visible_rows == 0 {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index - max_visible_rows + 1;
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scrolling_when_everything_fits() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
    }

    #[test]
    fn window_follows_the_selection() {
        assert_eq!(scroll_offset(100, 10, 0), 0);
        assert_eq!(scroll_offset(100, 10, 9), 0);
        assert_eq!(scroll_offset(100, 10, 10), 1);
        assert_eq!(scroll_offset(100, 10, 99), 90);
    }

    #[test]
    fn zero_height_window_does_not_underflow() {
        assert_eq!(scroll_offset(100, 0, 50), 0);
    }
}
