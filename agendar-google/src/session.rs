//! Persisted OAuth session for one Google account.
//!
//! Tokens live in a TOML file per account under ~/.config/agendar/sessions/.
//! Sessions refresh themselves when the access token has expired.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use google_calendar::{AccessToken, Client};
use serde::{Deserialize, Serialize};

use crate::app_config;

pub struct Session {
    account_email: String,
    data: SessionData,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SessionData {
    access_token: String,
    refresh_token: String,
    expires_at: DateTime<Utc>,
}

impl From<&AccessToken> for SessionData {
    fn from(tokens: &AccessToken) -> Self {
        let expires_at = Utc::now() + Duration::seconds(tokens.expires_in);

        SessionData {
            access_token: tokens.access_token.clone(),
            refresh_token: tokens.refresh_token.clone(),
            expires_at,
        }
    }
}

impl Session {
    pub fn new(account_email: &str, data: SessionData) -> Self {
        Session {
            account_email: account_email.to_string(),
            data,
        }
    }

    fn path_for_account_email(account_email: &str) -> Result<std::path::PathBuf> {
        let email_slug = account_email.replace(['/', '\\', ':'], "_");

        Ok(app_config::base_dir()?
            .join("sessions")
            .join(format!("{}.toml", email_slug)))
    }

    fn path(&self) -> Result<std::path::PathBuf> {
        Self::path_for_account_email(&self.account_email)
    }

    pub fn client(&self) -> Result<Client> {
        let creds = app_config::load()?;

        Ok(Client::new(
            creds.client_id,
            creds.client_secret,
            String::new(),
            self.data.access_token.clone(),
            self.data.refresh_token.clone(),
        ))
    }

    /// Load a session and refresh it if expired.
    pub async fn load_valid(account_email: &str) -> Result<Self> {
        let mut session = Self::load(account_email)?;

        if session.is_expired() {
            tracing::debug!(account = account_email, "access token expired, refreshing");
            session.refresh().await?;
        }

        Ok(session)
    }

    fn load(account_email: &str) -> Result<Self> {
        let path = Self::path_for_account_email(account_email)?;

        if !path.exists() {
            anyhow::bail!(
                "No Google session for {}. Run `agendar auth` first.",
                account_email
            );
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        let data: SessionData = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))?;

        Ok(Session {
            account_email: account_email.to_string(),
            data,
        })
    }

    pub fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(&self.data).context("Failed to serialize session")?;

        let path = self.path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;

        // Owner-only (0600) since the file contains OAuth tokens:
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
        }

        Ok(())
    }

    fn is_expired(&self) -> bool {
        Utc::now() >= self.data.expires_at
    }

    async fn refresh(&mut self) -> Result<()> {
        let creds = app_config::load()?;

        let client = Client::new(
            creds.client_id,
            creds.client_secret,
            String::new(),
            self.data.access_token.clone(),
            self.data.refresh_token.clone(),
        );

        let mut tokens = client
            .refresh_access_token()
            .await
            .context("Failed to refresh access token")?;

        tokens.refresh_token =
            merged_refresh_token(&self.data.refresh_token, &tokens.refresh_token);

        self.data = (&tokens).into();
        self.save()?;

        tracing::debug!(account = %self.account_email, "session refreshed");

        Ok(())
    }
}

/// Google typically leaves `refresh_token` empty when refreshing; keep the
/// stored one in that case.
fn merged_refresh_token(stored: &str, fresh: &str) -> String {
    if fresh.is_empty() {
        stored.to_string()
    } else {
        fresh.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_session_data(expires_at: DateTime<Utc>) -> SessionData {
        SessionData {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at,
        }
    }

    #[test]
    fn session_data_from_access_token() {
        let tokens = AccessToken {
            access_token: "abc".to_string(),
            refresh_token: "def".to_string(),
            expires_in: 3600,
            ..Default::default()
        };

        let before = Utc::now() + Duration::seconds(3600);
        let data = SessionData::from(&tokens);
        let after = Utc::now() + Duration::seconds(3600);

        assert_eq!(data.access_token, "abc");
        assert_eq!(data.refresh_token, "def");
        assert!(data.expires_at >= before && data.expires_at <= after);
    }

    #[test]
    fn expired_when_past() {
        let session = Session::new(
            "ana@example.com",
            make_session_data(Utc::now() - Duration::minutes(5)),
        );
        assert!(session.is_expired());
    }

    #[test]
    fn not_expired_when_future() {
        let session = Session::new(
            "ana@example.com",
            make_session_data(Utc::now() + Duration::minutes(30)),
        );
        assert!(!session.is_expired());
    }

    // --- merged_refresh_token ---

    #[test]
    fn empty_refresh_response_keeps_stored_token() {
        assert_eq!(merged_refresh_token("stored", ""), "stored");
    }

    #[test]
    fn new_refresh_token_replaces_stored() {
        assert_eq!(merged_refresh_token("stored", "fresh"), "fresh");
    }

    #[test]
    fn session_data_round_trips_through_toml() {
        let data = make_session_data(Utc::now() + Duration::hours(1));
        let toml_str = toml::to_string_pretty(&data).unwrap();
        let parsed: SessionData = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.access_token, data.access_token);
        assert_eq!(parsed.refresh_token, data.refresh_token);
        assert_eq!(parsed.expires_at, data.expires_at);
    }
}
