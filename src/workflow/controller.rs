//! The transform workflow controller

use super::state::{ActiveInput, CandidateFile, StatusLine};
use crate::capability::{DownloadSink, SubmitOutcome, Surface, Transport};
use crate::delivery::transformed_filename;
use crate::roster::ConsultantRoster;
use eyre::{Context, Result};

/// Drives the select → validate → submit → download flow.
///
/// The controller owns the workflow state (the active input slot and the
/// last status line) and is generic over its three capability seams, so
/// the terminal/webhook/disk production stack and the test fakes compose
/// the same way.
///
/// # Type Parameters
/// - `S`: display surface
/// - `T`: remote transport
/// - `D`: download sink
///
/// # Example
/// ```no_run
/// use cv_transformer::client::{Auth, WebhookClient};
/// use cv_transformer::delivery::DiskDownloadSink;
/// use cv_transformer::roster::ConsultantRoster;
/// use cv_transformer::terminal::TerminalSurface;
/// use cv_transformer::workflow::{CandidateFile, Controller};
/// use url::Url;
///
/// # async fn example() -> eyre::Result<()> {
/// let url = Url::parse("https://automation.example.com/webhook/cv")?;
/// let client = WebhookClient::try_new(url, Auth::None)?;
///
/// let mut controller = Controller::new(
///     TerminalSurface::new(),
///     client,
///     DiskDownloadSink::new("."),
///     ConsultantRoster::new(),
/// );
///
/// controller.on_file_change(Some(CandidateFile::from_path("cv.pdf")?));
/// controller.on_transform_trigger().await?;
/// # Ok(())
/// # }
/// ```
pub struct Controller<S, T, D>
where
    S: Surface,
    T: Transport,
    D: DownloadSink,
{
    surface: S,
    transport: T,
    downloads: D,
    roster: ConsultantRoster,
    input: ActiveInput,
    last_status: Option<StatusLine>,
}

impl<S, T, D> Controller<S, T, D>
where
    S: Surface,
    T: Transport,
    D: DownloadSink,
{
    /// Create a controller in its initial state (nothing selected).
    pub fn new(surface: S, transport: T, downloads: D, roster: ConsultantRoster) -> Self {
        Self {
            surface,
            transport,
            downloads,
            roster,
            input: ActiveInput::None,
            last_status: None,
        }
    }

    /// The consultant roster backing the selector.
    pub fn roster(&self) -> &ConsultantRoster {
        &self.roster
    }

    /// The current input slot.
    pub fn active_input(&self) -> &ActiveInput {
        &self.input
    }

    /// The most recent status line, if any was written.
    pub fn last_status(&self) -> Option<&StatusLine> {
        self.last_status.as_ref()
    }

    /// A consultant was selected.
    ///
    /// Records the id as the active selection, clearing any selected file
    /// along with its preview. No network effect.
    pub fn on_consultant_change(&mut self, id: &str) {
        let display = self.display_name(id);
        log::debug!("Consultant selected: {}", id);

        self.input = ActiveInput::Consultant(id.to_string());
        self.surface.clear_file_input();
        self.surface.clear_preview();
        self.status(&format!("Consultant {} selected.", display), false);
    }

    /// The file selection changed.
    ///
    /// A valid file becomes the active selection (clearing any active
    /// consultant) and gets a preview; an invalid one clears the file
    /// input and leaves the prior state untouched; no file clears the
    /// preview.
    pub fn on_file_change(&mut self, file: Option<CandidateFile>) {
        match file {
            Some(file) => {
                log::debug!(
                    "File selected: {} ({}, {} bytes)",
                    file.name,
                    file.content_type,
                    file.size()
                );
                if self.validate(Some(&file)) {
                    self.surface.clear_consultant_selection();
                    self.surface.show_preview(&file);
                    self.status(
                        &format!("File \"{}\" ready for transformation.", file.name),
                        false,
                    );
                    self.input = ActiveInput::File(file);
                } else {
                    self.surface.clear_file_input();
                }
            }
            None => {
                if matches!(self.input, ActiveInput::File(_)) {
                    self.input = ActiveInput::None;
                }
                self.surface.clear_preview();
                self.status("No file selected.", false);
            }
        }
    }

    /// Validate a candidate file.
    ///
    /// The single policy decision of the workflow: the declared MIME type
    /// must be exactly `application/pdf`. No content sniffing, no size
    /// limit. Failures are surfaced to the user here.
    pub fn validate(&mut self, file: Option<&CandidateFile>) -> bool {
        match file {
            None => {
                self.status("Error: no file provided.", true);
                false
            }
            Some(file) if !file.declares_pdf() => {
                let message = format!(
                    "Error: file \"{}\" is not a PDF. Please select a PDF file.",
                    file.name
                );
                self.status(&message, true);
                self.surface.alert(&message);
                false
            }
            Some(_) => true,
        }
    }

    /// The transform trigger was activated.
    ///
    /// With an active file, re-validates and submits it to the webhook,
    /// awaiting the outcome before returning. With an active consultant,
    /// only the lookup placeholder status is emitted; the consultant CV
    /// retrieval has no backing service yet and must not reach the
    /// network. With nothing active, fails fast with a user-visible
    /// error.
    ///
    /// Returns `true` when a transformed file was delivered.
    ///
    /// # Errors
    /// Returns an error only when a successfully transformed file cannot
    /// be written by the download sink; every remote outcome is surfaced
    /// through the status line instead.
    pub async fn on_transform_trigger(&mut self) -> Result<bool> {
        match self.input.clone() {
            ActiveInput::None => {
                let message = "Please select a consultant or upload a CV.";
                self.status(message, true);
                self.surface.alert(message);
                Ok(false)
            }
            ActiveInput::File(file) => {
                if !self.validate(Some(&file)) {
                    return Ok(false);
                }
                self.status(&format!("Transforming file \"{}\"...", file.name), false);
                self.submit(&file).await
            }
            ActiveInput::Consultant(id) => {
                let display = self.display_name(&id);
                self.status(&format!("Looking up CV for {}...", display), false);
                self.status(
                    &format!(
                        "CV retrieval for consultant {} is not implemented yet. \
                         Upload a file manually to run a transform.",
                        display
                    ),
                    false,
                );
                Ok(false)
            }
        }
    }

    /// Overwrite the status line.
    pub fn status(&mut self, message: &str, is_error: bool) {
        self.surface.set_status(message, is_error);
        self.last_status = Some(StatusLine {
            message: message.to_string(),
            is_error,
        });
    }

    /// Submit the file to the webhook and handle all three outcomes.
    ///
    /// The trigger is disabled before the await and re-enabled right
    /// after it returns, so success, rejection, and transport failure
    /// all leave the trigger usable again.
    async fn submit(&mut self, file: &CandidateFile) -> Result<bool> {
        self.status(
            &format!("Sending \"{}\" to the transform webhook...", file.name),
            false,
        );
        self.surface.set_trigger_enabled(false);
        let outcome = self.transport.submit(file).await;
        self.surface.set_trigger_enabled(true);

        match outcome {
            Ok(SubmitOutcome::Transformed(bytes)) => {
                self.status(
                    &format!("File \"{}\" transformed successfully!", file.name),
                    false,
                );
                let filename = transformed_filename(&file.name);
                self.deliver(&bytes, &filename)?;
                Ok(true)
            }
            Ok(SubmitOutcome::Rejected { status, body }) => {
                self.status(
                    &format!(
                        "Error while processing file \"{}\". Status: {}. {}",
                        file.name, status, body
                    ),
                    true,
                );
                self.surface
                    .alert(&format!("Server error: {}. Details: {}", status, body));
                Ok(false)
            }
            Err(error) => {
                self.status(
                    &format!("Connection error while sending \"{}\". {}", file.name, error),
                    true,
                );
                self.surface.alert(&format!("Connection error: {}", error));
                Ok(false)
            }
        }
    }

    /// Deliver the transformed bytes as a local download, then reset the
    /// workflow to its initial state.
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<()> {
        self.downloads
            .deliver(bytes, filename)
            .with_context(|| format!("Failed to deliver \"{}\"", filename))?;

        self.status(
            &format!("Transformed file \"{}\" has been downloaded.", filename),
            false,
        );

        self.input = ActiveInput::None;
        self.surface.clear_file_input();
        self.surface.clear_preview();
        self.surface.clear_consultant_selection();

        Ok(())
    }

    fn display_name(&self, id: &str) -> String {
        self.roster.name_of(id).unwrap_or(id).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ConsultantEntry;
    use crate::workflow::PDF_MEDIA_TYPE;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct NullSurface;

    impl Surface for NullSurface {
        fn set_status(&self, _message: &str, _is_error: bool) {}
        fn alert(&self, _message: &str) {}
        fn show_preview(&self, _file: &CandidateFile) {}
        fn clear_preview(&self) {}
        fn set_trigger_enabled(&self, _enabled: bool) {}
        fn clear_file_input(&self) {}
        fn clear_consultant_selection(&self) {}
    }

    struct CountingTransport(Arc<Mutex<usize>>);

    #[async_trait]
    impl Transport for CountingTransport {
        async fn submit(&self, _file: &CandidateFile) -> eyre::Result<SubmitOutcome> {
            *self.0.lock().unwrap() += 1;
            Ok(SubmitOutcome::Transformed(vec![1, 2, 3]))
        }
    }

    struct NullSink;

    impl DownloadSink for NullSink {
        fn deliver(&self, _bytes: &[u8], filename: &str) -> eyre::Result<PathBuf> {
            Ok(PathBuf::from(filename))
        }
    }

    fn controller(
        calls: Arc<Mutex<usize>>,
    ) -> Controller<NullSurface, CountingTransport, NullSink> {
        let roster = ConsultantRoster::with_consultants(vec![ConsultantEntry::new(
            "adurand".to_string(),
            "Alice Durand".to_string(),
        )]);
        Controller::new(NullSurface, CountingTransport(calls), NullSink, roster)
    }

    fn pdf(name: &str) -> CandidateFile {
        CandidateFile::new(name, PDF_MEDIA_TYPE, vec![0x25, 0x50, 0x44, 0x46])
    }

    #[test]
    fn test_consultant_selection_clears_file() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        controller.on_file_change(Some(pdf("cv.pdf")));
        assert!(controller.active_input().file().is_some());

        controller.on_consultant_change("adurand");
        assert_eq!(controller.active_input().consultant(), Some("adurand"));
        assert!(controller.active_input().file().is_none());
    }

    #[test]
    fn test_file_selection_clears_consultant() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        controller.on_consultant_change("adurand");
        assert!(controller.active_input().consultant().is_some());

        controller.on_file_change(Some(pdf("cv.pdf")));
        assert!(controller.active_input().file().is_some());
        assert_eq!(controller.active_input().consultant(), None);
    }

    #[test]
    fn test_consultant_status_uses_display_name() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        controller.on_consultant_change("adurand");
        let status = controller.last_status().unwrap();
        assert_eq!(status.message, "Consultant Alice Durand selected.");
        assert!(!status.is_error);
    }

    #[test]
    fn test_unknown_consultant_falls_back_to_id() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        controller.on_consultant_change("zmystery");
        let status = controller.last_status().unwrap();
        assert_eq!(status.message, "Consultant zmystery selected.");
    }

    #[test]
    fn test_validate_rejects_non_pdf_types() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        for declared in ["", "text/plain", "application/PDF", "image/png"] {
            let file = CandidateFile::new("cv.pdf", declared, vec![1]);
            assert!(!controller.validate(Some(&file)));
            assert!(controller.last_status().unwrap().is_error);
        }
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        assert!(!controller.validate(None));
        assert_eq!(
            controller.last_status().unwrap().message,
            "Error: no file provided."
        );
    }

    #[test]
    fn test_validate_accepts_pdf_regardless_of_name_and_size() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        let empty = CandidateFile::new("anything-at-all", PDF_MEDIA_TYPE, Vec::new());
        assert!(controller.validate(Some(&empty)));
    }

    #[test]
    fn test_invalid_file_leaves_prior_state_untouched() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        controller.on_consultant_change("adurand");
        controller.on_file_change(Some(CandidateFile::new("cv.txt", "text/plain", vec![1])));

        // The failed pick never displaces the active consultant.
        assert_eq!(controller.active_input().consultant(), Some("adurand"));
    }

    #[test]
    fn test_file_change_none_drops_active_file() {
        let mut controller = controller(Arc::new(Mutex::new(0)));

        controller.on_file_change(Some(pdf("cv.pdf")));
        controller.on_file_change(None);

        assert!(controller.active_input().is_none());
        assert_eq!(controller.last_status().unwrap().message, "No file selected.");
    }

    #[tokio::test]
    async fn test_trigger_without_selection_never_submits() {
        let calls = Arc::new(Mutex::new(0));
        let mut controller = controller(calls.clone());

        let delivered = controller.on_transform_trigger().await.unwrap();

        assert!(!delivered);
        assert_eq!(*calls.lock().unwrap(), 0);
        let status = controller.last_status().unwrap();
        assert_eq!(status.message, "Please select a consultant or upload a CV.");
        assert!(status.is_error);
    }

    #[tokio::test]
    async fn test_consultant_trigger_emits_placeholder_without_network() {
        let calls = Arc::new(Mutex::new(0));
        let mut controller = controller(calls.clone());

        controller.on_consultant_change("adurand");
        let delivered = controller.on_transform_trigger().await.unwrap();

        assert!(!delivered);
        assert_eq!(*calls.lock().unwrap(), 0);
        let status = controller.last_status().unwrap();
        assert!(status.message.contains("not implemented yet"));
        assert!(status.message.contains("Alice Durand"));
        assert!(!status.is_error);
    }

    #[tokio::test]
    async fn test_successful_transform_resets_state() {
        let calls = Arc::new(Mutex::new(0));
        let mut controller = controller(calls.clone());

        controller.on_file_change(Some(pdf("resume.pdf")));
        let delivered = controller.on_transform_trigger().await.unwrap();

        assert!(delivered);
        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(controller.active_input().is_none());
        assert_eq!(
            controller.last_status().unwrap().message,
            "Transformed file \"CV_resume_Transformed.pdf\" has been downloaded."
        );
    }
}
