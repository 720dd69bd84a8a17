//! HTML templates and styling for the quicknote page.
//!
//! ## Module Structure
//!
//! - `styles` - CSS for the single-page interface
//! - `components` - Base page, compose form, note list, and error page

mod components;
mod styles;

pub use components::{base_html, compose_form, error_page, index_page, note_list};
pub use styles::STYLE;
