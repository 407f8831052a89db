//! Surface trait for the workflow display capabilities

use crate::workflow::CandidateFile;

/// Display surface the workflow controller writes to.
///
/// Implementors expose the small set of UI capabilities the workflow
/// needs: a single status line, a blocking alert, a file preview region,
/// the transform trigger's enabled state, and the two input widgets
/// (file picker and consultant selector) that the controller clears.
///
/// The production implementation renders to the terminal; tests record
/// calls into a shared log.
///
/// # Example
/// ```
/// use cv_transformer::capability::Surface;
/// use cv_transformer::workflow::CandidateFile;
///
/// struct QuietSurface;
///
/// impl Surface for QuietSurface {
///     fn set_status(&self, _message: &str, _is_error: bool) {}
///     fn alert(&self, _message: &str) {}
///     fn show_preview(&self, _file: &CandidateFile) {}
///     fn clear_preview(&self) {}
///     fn set_trigger_enabled(&self, _enabled: bool) {}
///     fn clear_file_input(&self) {}
///     fn clear_consultant_selection(&self) {}
/// }
/// ```
pub trait Surface: Send + Sync {
    /// Overwrite the single status line. Last write wins; no history.
    fn set_status(&self, message: &str, is_error: bool);

    /// Raise a prominent, attention-demanding message.
    fn alert(&self, message: &str);

    /// Render a preview of the selected file (name, size, declared type).
    fn show_preview(&self, file: &CandidateFile);

    /// Reset the preview region to its empty state.
    fn clear_preview(&self);

    /// Enable or disable the transform trigger control.
    fn set_trigger_enabled(&self, enabled: bool);

    /// Clear the file picker so no file is selected.
    fn clear_file_input(&self);

    /// Clear the consultant selector so no consultant is selected.
    fn clear_consultant_selection(&self);
}
