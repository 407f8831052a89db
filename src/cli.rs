//! CLI helper functions

use crate::{
    client::{Auth, AuthType, WebhookClient},
    delivery::DiskDownloadSink,
    roster::ConsultantRoster,
    terminal::TerminalSurface,
    workflow::{CandidateFile, Controller},
};
use eyre::{Context, Result, eyre};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

/// Load the webhook client from environment variables
///
/// Expected environment variables:
/// - WEBHOOK_URL: transform webhook endpoint (required)
/// - WEBHOOK_AUTH: auth type, one of apikey/basic/none (optional; inferred
///   from the credential variables when unset)
/// - WEBHOOK_USERNAME: username for basic auth (optional)
/// - WEBHOOK_PASSWORD: password for basic auth (optional)
/// - WEBHOOK_APIKEY: API key for auth (optional, takes precedence over
///   username/password when inferring)
pub fn load_webhook_client() -> Result<WebhookClient> {
    let url_str =
        std::env::var("WEBHOOK_URL").context("WEBHOOK_URL environment variable not set")?;
    let url = Url::parse(&url_str).with_context(|| format!("Invalid WEBHOOK_URL: {}", url_str))?;

    let auth = match std::env::var("WEBHOOK_AUTH") {
        Ok(auth_type) => {
            let auth_type = AuthType::from_str(&auth_type).map_err(|_| {
                eyre!(
                    "Invalid WEBHOOK_AUTH: {} (expected apikey, basic, or none)",
                    auth_type
                )
            })?;
            Auth::new(
                &auth_type,
                std::env::var("WEBHOOK_USERNAME").ok(),
                std::env::var("WEBHOOK_PASSWORD").ok(),
                std::env::var("WEBHOOK_APIKEY").ok(),
            )
        }
        Err(_) => {
            if let Ok(apikey) = std::env::var("WEBHOOK_APIKEY") {
                Auth::Apikey(apikey)
            } else if let (Ok(username), Ok(password)) = (
                std::env::var("WEBHOOK_USERNAME"),
                std::env::var("WEBHOOK_PASSWORD"),
            ) {
                Auth::Basic(username, password)
            } else {
                Auth::None
            }
        }
    };

    WebhookClient::try_new(url, auth).context("Failed to create webhook client")
}

/// Load the consultant roster
///
/// Reads the file named by CONSULTANTS_FILE (default `consultants.yml`).
/// A missing file yields an empty roster.
pub fn load_roster() -> Result<ConsultantRoster> {
    let path = std::env::var("CONSULTANTS_FILE").unwrap_or_else(|_| "consultants.yml".to_string());
    let path = Path::new(&path);

    if path.exists() {
        log::debug!("Loading consultant roster from {}", path.display());
        ConsultantRoster::read(path).with_context(|| "Failed to load consultant roster")
    } else {
        log::debug!(
            "No consultant roster found at {}, using empty roster",
            path.display()
        );
        Ok(ConsultantRoster::new())
    }
}

/// Directory transformed files are saved to (DOWNLOAD_DIR, default `.`)
pub fn download_dir() -> PathBuf {
    std::env::var("DOWNLOAD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Run the transform workflow
///
/// Replays the selection events against the controller, then activates
/// the trigger: a file path becomes a file-change event, a consultant id
/// a consultant-change event; with neither, the trigger guard reports
/// the missing selection.
pub async fn run_transform(file: Option<&Path>, consultant: Option<&str>) -> Result<()> {
    let client = load_webhook_client()?;
    let roster = load_roster()?;
    let downloads = DiskDownloadSink::new(download_dir());

    log::info!("Using webhook: {}", client);

    let mut controller = Controller::new(TerminalSurface::new(), client, downloads, roster);

    if let Some(id) = consultant {
        if controller.roster().count() > 0 && !controller.roster().contains(id) {
            eyre::bail!(
                "Consultant '{}' not found in roster. Available consultants: {}",
                id,
                controller.roster().ids().join(", ")
            );
        }
        controller.on_consultant_change(id);
    }

    if let Some(path) = file {
        let candidate = CandidateFile::from_path(path)?;
        controller.on_file_change(Some(candidate));
    }

    let delivered = controller.on_transform_trigger().await?;

    // The consultant path is a placeholder and exits cleanly; anything
    // else that did not deliver is a failed attempt.
    if consultant.is_none() && !delivered {
        eyre::bail!("No transformed file was produced");
    }

    Ok(())
}

/// List the roster consultants
///
/// Optionally filter by display name using regex patterns (--include,
/// --exclude). Include is applied first, then exclude.
pub fn list_consultants(include: Option<&str>, exclude: Option<&str>) -> Result<usize> {
    let roster = load_roster()?;
    log::info!("Roster has {} consultant(s)", roster.count());

    let mut entries = roster.consultants;

    if let Some(include_pattern) = include {
        let regex = regex::Regex::new(include_pattern)
            .with_context(|| format!("Invalid include regex pattern: {}", include_pattern))?;

        entries.retain(|c| regex.is_match(&c.name));

        log::info!(
            "After include filter '{}': {} consultant(s)",
            include_pattern,
            entries.len()
        );
    }

    if let Some(exclude_pattern) = exclude {
        let regex = regex::Regex::new(exclude_pattern)
            .with_context(|| format!("Invalid exclude regex pattern: {}", exclude_pattern))?;

        entries.retain(|c| !regex.is_match(&c.name));

        log::info!(
            "After exclude filter '{}': {} consultant(s)",
            exclude_pattern,
            entries.len()
        );
    }

    for entry in &entries {
        println!("{} {}", entry.id.green(), entry.name.bright_black());
    }

    Ok(entries.len())
}
