//! Cursor and scroll state for a selectable list.

/// Position and scroll state within the current route's list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed).
    pub position: usize,
    /// Scroll offset for virtual scrolling (rows scrolled from top).
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Creates a cursor at the top of the list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the cursor to the top of the list.
    pub const fn reset(&mut self) {
        self.position = 0;
        self.scroll_offset = 0;
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, the cursor is set to 0. If the cursor exceeds
    /// the list length, it is set to the last valid index.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.scroll_offset = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by `step` positions.
    pub const fn move_up(&mut self, step: usize) {
        self.position = self.position.saturating_sub(step);
    }

    /// Moves the cursor down by `step` positions, bounded by `count`.
    pub fn move_down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        self.position = self.position.saturating_add(step).min(max_index);
    }

    /// Moves the cursor to the first item and scrolls to the top.
    pub const fn home(&mut self) {
        self.position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, count: usize) {
        self.position = count.saturating_sub(1);
    }

    /// Adjusts the scroll offset so the cursor remains within the viewport.
    pub const fn ensure_visible(&mut self, visible_height: usize) {
        if self.position < self.scroll_offset {
            self.scroll_offset = self.position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.position >= viewport_end {
            self.scroll_offset = self
                .position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ListCursor;

    #[test]
    fn clamp_sets_to_zero_when_empty() {
        let mut cursor = ListCursor {
            position: 5,
            scroll_offset: 3,
        };
        cursor.clamp(0);
        assert_eq!(cursor.position, 0);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn clamp_reduces_to_last_valid_index() {
        let mut cursor = ListCursor {
            position: 10,
            ..ListCursor::default()
        };
        cursor.clamp(5);
        assert_eq!(cursor.position, 4);
    }

    #[test]
    fn movement_respects_bounds() {
        let mut cursor = ListCursor::new();

        cursor.move_up(1);
        assert_eq!(cursor.position, 0, "cannot move above the first row");

        cursor.move_down(1, 3);
        assert_eq!(cursor.position, 1);

        cursor.move_down(10, 3);
        assert_eq!(cursor.position, 2, "cannot move past the last row");

        cursor.end(3);
        assert_eq!(cursor.position, 2);

        cursor.home();
        assert_eq!(cursor.position, 0);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn ensure_visible_scrolls_down_to_cursor() {
        let mut cursor = ListCursor {
            position: 12,
            scroll_offset: 0,
        };
        cursor.ensure_visible(10);
        assert_eq!(cursor.scroll_offset, 3);
    }

    #[test]
    fn ensure_visible_scrolls_up_to_cursor() {
        let mut cursor = ListCursor {
            position: 2,
            scroll_offset: 5,
        };
        cursor.ensure_visible(10);
        assert_eq!(cursor.scroll_offset, 2);
    }
}
