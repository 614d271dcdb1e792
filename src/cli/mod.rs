//! CLI entry points for the dashboard.
//!
//! The binary has a single mode: run the dashboard TUI against the
//! configured backend, opening on the route selected by the CLI flags.

pub mod dashboard;
