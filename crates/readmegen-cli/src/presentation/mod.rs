//! Shared CLI presentation utilities.
//!
//! Everything printed by the handlers goes through here. Rendering is a pure
//! function of the workflow state plus the theme palette.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no workflow transitions
//! - Return strings; handlers decide where they are printed

pub mod generation_view;
pub mod palette;
pub mod picker_view;
pub mod spinner;

pub use generation_view::{copy_label, render_for_stdout, render_generation};
pub use palette::Palette;
pub use picker_view::render_picker;
pub use spinner::Spinner;
