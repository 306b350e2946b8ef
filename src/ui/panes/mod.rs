//! TUI pane rendering modules
//!
//! - [`chart`]: one bar chart per running algorithm, with move counters
//! - [`status`]: status bar with keybindings, speed, and run state
//!
//! Each pane module exports a primary `render_*` function that draws from
//! borrowed state and keeps nothing between frames.

pub mod chart;
pub mod status;

pub use chart::{bar_columns, render_chart_pane, Column};
pub use status::{render_status_bar, StatusRenderData};
