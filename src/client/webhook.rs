//! Webhook client module
//!
//! Provides `WebhookClient` for submitting CV files to the remote
//! transform webhook as a multipart upload.

use super::Auth;
use crate::capability::{SubmitOutcome, Transport};
use crate::workflow::CandidateFile;
use async_trait::async_trait;
use base64::Engine;
use eyre::{Context, Result, eyre};
use reqwest::{Client, multipart};
use url::Url;

/// HTTP client for the remote transform webhook.
///
/// The webhook is a single fixed endpoint: every transform attempt is one
/// multipart POST carrying the file under the form field `file`, with no
/// retries. Credentials are attached as default headers at construction
/// time.
///
/// No request timeout is configured; a webhook that never responds keeps
/// the attempt pending.
///
/// # Example
/// ```no_run
/// use cv_transformer::client::{Auth, WebhookClient};
/// use cv_transformer::capability::{SubmitOutcome, Transport};
/// use cv_transformer::workflow::CandidateFile;
/// use url::Url;
///
/// # async fn example() -> eyre::Result<()> {
/// let url = Url::parse("https://automation.example.com/webhook/cv")?;
/// let client = WebhookClient::try_new(url, Auth::None)?;
///
/// let file = CandidateFile::from_path("cv.pdf")?;
/// match client.submit(&file).await? {
///     SubmitOutcome::Transformed(bytes) => println!("{} byte(s) back", bytes.len()),
///     SubmitOutcome::Rejected { status, body } => println!("{}: {}", status, body),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct WebhookClient {
    client: Client,
    url: Url,
}

impl WebhookClient {
    /// Create a new webhook client from a URL and Auth.
    ///
    /// # Errors
    /// Returns an error if the credentials cannot be encoded as headers
    /// or the HTTP client cannot be built.
    pub fn try_new(url: Url, auth: Auth) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        match auth {
            Auth::Basic(username, password) => {
                let credentials = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", username, password));
                headers.append(
                    reqwest::header::AUTHORIZATION,
                    format!("Basic {}", credentials).parse()?,
                );
            }
            Auth::Apikey(apikey) => {
                headers.append(
                    reqwest::header::AUTHORIZATION,
                    format!("ApiKey {}", apikey).parse()?,
                );
            }
            Auth::None => {}
        }
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, url })
    }

    /// The webhook endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for WebhookClient {
    /// POST the file to the webhook as multipart form data.
    ///
    /// The file is uploaded under the field name `file` with its original
    /// filename and declared MIME type. A 2xx response body is read as
    /// the transformed PDF bytes; a non-2xx body is read as text.
    async fn submit(&self, file: &CandidateFile) -> Result<SubmitOutcome> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .with_context(|| format!("Invalid declared content type: {}", file.content_type))?;
        let form = multipart::Form::new().part("file", part);

        log::debug!(
            "Submitting \"{}\" ({} byte(s)) to {}",
            file.name,
            file.size(),
            self.url
        );

        let response = self
            .client
            .post(self.url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| eyre!("Failed to send file to webhook: {}", e))?;

        let status = response.status();
        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .with_context(|| "Failed to read transformed response body")?;
            log::info!("✓ Webhook returned {} with {} byte(s)", status, bytes.len());
            Ok(SubmitOutcome::Transformed(bytes.to_vec()))
        } else {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Webhook rejected \"{}\" ({}): {}", file.name, status, body);
            Ok(SubmitOutcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl std::fmt::Display for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
