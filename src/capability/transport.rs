//! Transport trait for the remote transform submission

use crate::workflow::CandidateFile;
use async_trait::async_trait;
use eyre::Result;

/// Outcome of a submission that obtained an HTTP response.
///
/// Transport-level failures (network, DNS, TLS) never produce an outcome;
/// they surface as the `Err` branch of [`Transport::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Any 2xx response; the payload is the transformed PDF body.
    Transformed(Vec<u8>),
    /// Any non-2xx response, with its status code and textual error body.
    Rejected { status: u16, body: String },
}

/// Transport trait for submitting a candidate file to the transform webhook
///
/// The workflow performs exactly one submission per trigger; implementors
/// must not retry.
///
/// # Example
/// ```no_run
/// use cv_transformer::capability::{SubmitOutcome, Transport};
/// use cv_transformer::workflow::CandidateFile;
/// use async_trait::async_trait;
/// use eyre::Result;
///
/// struct EchoTransport;
///
/// #[async_trait]
/// impl Transport for EchoTransport {
///     async fn submit(&self, file: &CandidateFile) -> Result<SubmitOutcome> {
///         Ok(SubmitOutcome::Transformed(file.bytes.clone()))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit a file and await the remote outcome.
    ///
    /// # Errors
    /// Returns an error only for transport failures that prevent a
    /// response from being obtained.
    async fn submit(&self, file: &CandidateFile) -> Result<SubmitOutcome>;
}
