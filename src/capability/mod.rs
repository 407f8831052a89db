//! Capability seams for the transform workflow
//!
//! The workflow controller drives three external capabilities: a display
//! surface, the remote transform transport, and a local download sink.
//! Each is a trait so tests can substitute fakes for the real terminal,
//! webhook, and disk implementations.

mod download;
mod surface;
mod transport;

pub use download::DownloadSink;
pub use surface::Surface;
pub use transport::{SubmitOutcome, Transport};
