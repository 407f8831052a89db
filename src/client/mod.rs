//! Webhook client and authentication.
//!
//! This module provides the [`WebhookClient`] for submitting CV files to
//! the remote transform webhook, along with authentication types
//! ([`Auth`], [`AuthType`]).

mod auth;
mod webhook;

pub use auth::{Auth, AuthType};
pub use webhook::WebhookClient;
