//! Page rendering
//!
//! Renders the server-side HTML pages.

pub mod renderer;

pub use renderer::{render_about, render_error, render_home, render_privacy};
