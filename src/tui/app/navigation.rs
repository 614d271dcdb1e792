//! Navigation handlers and cursor management.
//!
//! Each navigation method updates the cursor position within the current
//! route's list and then adjusts scrolling so the cursor remains in the
//! visible window.

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.list_len();
        let page_size = self.list_height();

        match msg {
            AppMsg::CursorUp => self.cursor.move_up(1),
            AppMsg::CursorDown => self.cursor.move_down(1, count),
            AppMsg::PageUp => self.cursor.move_up(page_size),
            AppMsg::PageDown => self.cursor.move_down(page_size, count),
            AppMsg::CursorHome => self.cursor.home(),
            AppMsg::CursorEnd => self.cursor.end(count),
            _ => {
                // Unreachable: caller filters to navigation messages.
            }
        }

        self.cursor.clamp(count);
        self.cursor.ensure_visible(page_size);
        None
    }
}
