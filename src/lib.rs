//! CV Transformer
//!
//! A CLI workflow for sending consultant CVs to a remote transform
//! webhook and saving the returned PDF locally

pub mod capability;
pub mod cli;
pub mod client;
pub mod delivery;
pub mod roster;
pub mod terminal;
pub mod workflow;

// Re-exports for convenience
pub use capability::{DownloadSink, SubmitOutcome, Surface, Transport};
pub use client::{Auth, AuthType, WebhookClient};
pub use delivery::{DiskDownloadSink, transformed_filename};
pub use roster::{ConsultantEntry, ConsultantRoster};
pub use terminal::TerminalSurface;
pub use workflow::{ActiveInput, CandidateFile, Controller, PDF_MEDIA_TYPE, StatusLine};
