//! Terminal rendering of the workflow surface

use crate::capability::Surface;
use crate::workflow::CandidateFile;
use owo_colors::OwoColorize;

/// Terminal implementation of the workflow [`Surface`].
///
/// Status lines go to stdout; errors and alerts go to stderr in red. The
/// widget-only operations (trigger state, input clears) have no terminal
/// counterpart and are logged at debug level so `--debug` runs still show
/// the full event sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for TerminalSurface {
    fn set_status(&self, message: &str, is_error: bool) {
        if is_error {
            eprintln!("{}", message.red());
        } else {
            println!("{}", message);
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{} {}", "!".red().bold(), message.bold());
    }

    fn show_preview(&self, file: &CandidateFile) {
        println!(
            "Selected file: {} ({:.2} KB)",
            file.name.green(),
            file.size_kb()
        );
        println!("Type: {}", file.content_type.bright_black());
    }

    fn clear_preview(&self) {
        log::debug!("Preview cleared");
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        log::debug!("Transform trigger enabled: {}", enabled);
    }

    fn clear_file_input(&self) {
        log::debug!("File input cleared");
    }

    fn clear_consultant_selection(&self) {
        log::debug!("Consultant selection cleared");
    }
}
