//! HTML templates and styling for the mind dump pages.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants
//! - `components` - Shared HTML components (base template, counter, share dialog)
//! - `views` - One page per workflow phase plus the share handoff

mod components;
mod styles;
mod views;

pub use components::{base_html, html_escape, notes_counter, share_dialog};
pub use styles::STYLE;
pub use views::{
    render_composing, render_handoff, render_processing, render_result, MAX_NOTE_CHARS,
    PROCESSING_REFRESH_SECS,
};

use crate::workflow::{Phase, Workflow};

/// Render whichever page the workflow's phase calls for.
pub fn render_page(workflow: &Workflow, placeholder: &str, captured: bool) -> String {
    match workflow.phase() {
        Phase::Composing => render_composing(workflow.notes().len(), placeholder, captured),
        Phase::Processing { .. } => render_processing(),
        Phase::ResultReady(result) => render_result(result, workflow.dialog()),
    }
}
