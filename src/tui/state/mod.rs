//! State management for dashboard list views.
//!
//! The dashboard shows one selectable list per route; this module provides
//! the cursor type tracking the user's position within it. Cursor position
//! is retained across data refreshes (clamped to the valid range).

mod list_cursor;

pub use list_cursor::ListCursor;
