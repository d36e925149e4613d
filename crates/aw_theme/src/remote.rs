//! HTTP save endpoint
//!
//! `POST <base>/api/save-theme` with the record as the JSON body. Any 2xx is
//! success; otherwise the server's `message` field becomes the error text.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::editor::ThemeSaver;
use crate::error::SaveError;
use crate::record::{PersistedTheme, ThemeRecord};

pub const SAVE_THEME_PATH: &str = "/api/save-theme";

pub struct HttpThemeSaver {
    client: Client,
    endpoint: String,
}

impl HttpThemeSaver {
    /// `base` is the site origin, e.g. `https://example.com`.
    pub fn new(base: &str) -> Self {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: &str) -> Self {
        Self {
            client,
            endpoint: save_url(base),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Join a base URL and the save path without doubling the slash.
pub fn save_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), SAVE_THEME_PATH)
}

/// Error text for a rejected save: the body's `message` when present.
pub(crate) fn rejection_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("theme save failed with status {status}"))
}

#[async_trait]
impl ThemeSaver for HttpThemeSaver {
    async fn save(&self, record: &ThemeRecord) -> Result<(), SaveError> {
        let body = serde_json::to_value(PersistedTheme::from(record))?;
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SaveError::Rejected {
                status: status.as_u16(),
                message: rejection_message(status.as_u16(), &text),
            });
        }

        debug!("HttpThemeSaver::save - {} accepted `{}`", self.endpoint, record.key);
        Ok(())
    }
}
