//! Transform workflow controller
//!
//! One linear flow: select/upload → validate → submit to the webhook →
//! receive the result → deliver a local download → reset. The controller
//! owns the workflow state and drives the capability seams; it has no
//! state machine beyond the mutually-exclusive input slot.

mod controller;
mod state;

pub use controller::Controller;
pub use state::{ActiveInput, CandidateFile, PDF_MEDIA_TYPE, StatusLine};
