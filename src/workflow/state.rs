//! Workflow state types

use eyre::{Context, Result, eyre};
use std::path::Path;

/// The one declared media type the workflow accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// An in-memory CV file selected for transformation.
///
/// The `content_type` is the *declared* type reported by the file
/// selection capability; it is trusted without content inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    /// Original filename, carried through to the multipart upload.
    pub name: String,
    /// Declared MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    /// Create a candidate file from parts.
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a candidate file from disk.
    ///
    /// The declared type is derived from the filename extension, the same
    /// way a file picker declares it: `.pdf` maps to `application/pdf`,
    /// anything else to `application/octet-stream`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| eyre!("File has no usable name: {}", path.display()))?;

        let content_type = declared_content_type(path);

        Ok(Self {
            name,
            content_type,
            bytes,
        })
    }

    /// File size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// File size in kilobytes, for the preview display.
    pub fn size_kb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }

    /// Whether the declared type is exactly the PDF media type.
    pub fn declares_pdf(&self) -> bool {
        self.content_type == PDF_MEDIA_TYPE
    }
}

/// Map a path extension to a declared MIME type.
fn declared_content_type(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MEDIA_TYPE.to_string(),
        _ => "application/octet-stream".to_string(),
    }
}

/// The workflow's single input slot.
///
/// A transform attempt takes at most one active input; selecting a file
/// clears a selected consultant and vice versa. The enum makes that
/// mutual exclusion hold by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveInput {
    /// Nothing selected, the initial (and post-reset) state.
    #[default]
    None,
    /// An uploaded CV file.
    File(CandidateFile),
    /// A consultant id from the roster.
    Consultant(String),
}

impl ActiveInput {
    /// The active file, if one is selected.
    pub fn file(&self) -> Option<&CandidateFile> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// The active consultant id, if one is selected.
    pub fn consultant(&self) -> Option<&str> {
        match self {
            Self::Consultant(id) => Some(id),
            _ => None,
        }
    }

    /// Whether no input is active.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The most recent status message, with its error flag.
///
/// Last write wins; the workflow keeps no status history.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_declares_pdf_exact_match_only() {
        let pdf = CandidateFile::new("cv.pdf", "application/pdf", vec![1, 2, 3]);
        assert!(pdf.declares_pdf());

        for declared in ["", "application/PDF", "application/pdf ", "text/plain", "image/png"] {
            let file = CandidateFile::new("cv.pdf", declared, vec![1, 2, 3]);
            assert!(!file.declares_pdf(), "declared type {:?} must not pass", declared);
        }
    }

    #[test]
    fn test_declares_pdf_ignores_name_and_size() {
        let odd = CandidateFile::new("not-even-a-pdf.txt", "application/pdf", Vec::new());
        assert!(odd.declares_pdf());
    }

    #[test]
    fn test_size_kb() {
        let file = CandidateFile::new("cv.pdf", "application/pdf", vec![0u8; 2048]);
        assert_eq!(file.size(), 2048);
        assert!((file.size_kb() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_path_declares_pdf_by_extension() {
        let mut temp = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        temp.write_all(b"%PDF-1.4 pretend").unwrap();

        let file = CandidateFile::from_path(temp.path()).unwrap();
        assert_eq!(file.content_type, PDF_MEDIA_TYPE);
        assert_eq!(file.bytes, b"%PDF-1.4 pretend");
        assert!(file.name.ends_with(".pdf"));
    }

    #[test]
    fn test_from_path_uppercase_extension() {
        let temp = tempfile::Builder::new().suffix(".PDF").tempfile().unwrap();
        let file = CandidateFile::from_path(temp.path()).unwrap();
        assert_eq!(file.content_type, PDF_MEDIA_TYPE);
    }

    #[test]
    fn test_from_path_other_extension_is_octet_stream() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"plain text").unwrap();

        let file = CandidateFile::from_path(temp.path()).unwrap();
        assert_eq!(file.content_type, "application/octet-stream");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = CandidateFile::from_path("/nonexistent/cv.pdf");
        assert!(result.is_err());
    }

    #[test]
    fn test_active_input_mutual_exclusion_by_construction() {
        let file = CandidateFile::new("cv.pdf", PDF_MEDIA_TYPE, vec![1]);

        let with_file = ActiveInput::File(file.clone());
        assert_eq!(with_file.file(), Some(&file));
        assert_eq!(with_file.consultant(), None);

        let with_consultant = ActiveInput::Consultant("adurand".to_string());
        assert_eq!(with_consultant.file(), None);
        assert_eq!(with_consultant.consultant(), Some("adurand"));

        assert!(ActiveInput::default().is_none());
    }
}
