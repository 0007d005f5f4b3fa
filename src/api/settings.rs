use serde::Deserialize;

use crate::client::ApiClient;
use crate::models::SiteSettings;
use crate::Result;

#[derive(Deserialize)]
struct SettingsEnvelope {
    data: SiteSettings,
}

/// `GET /settings` - site-wide content, served under a `data` envelope
#[tracing::instrument(skip(client))]
pub async fn site_settings(client: &ApiClient) -> Result<SiteSettings> {
    let envelope: SettingsEnvelope = client.get("/settings").await?;
    Ok(envelope.data)
}
