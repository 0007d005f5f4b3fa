use serde::Deserialize;

use crate::client::ApiClient;
use crate::models::{CheckoutSession, CheckoutStats, CompleteCheckout, PageQuery, Pagination};
use crate::Result;

#[derive(Deserialize)]
struct SessionsEnvelope {
    sessions: Vec<CheckoutSession>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Deserialize)]
struct SessionEnvelope {
    session: CheckoutSession,
}

#[derive(Deserialize)]
struct StatsEnvelope {
    stats: CheckoutStats,
}

pub struct SessionPage {
    pub sessions: Vec<CheckoutSession>,
    pub pagination: Option<Pagination>,
}

/// `GET /checkout/sessions` - the caller's own stay bills
#[tracing::instrument(skip(client))]
pub async fn list_mine(client: &ApiClient) -> Result<Vec<CheckoutSession>> {
    let envelope: SessionsEnvelope = client.get("/checkout/sessions").await?;
    Ok(envelope.sessions)
}

/// `GET /checkout/summary` for a stay window
#[tracing::instrument(skip(client))]
pub async fn summary(
    client: &ApiClient,
    check_in_date: &str,
    check_out_date: &str,
) -> Result<CheckoutSession> {
    let envelope: SessionEnvelope = client
        .get_with_query(
            "/checkout/summary",
            vec![
                ("checkInDate".to_string(), check_in_date.to_string()),
                ("checkOutDate".to_string(), check_out_date.to_string()),
            ],
        )
        .await?;
    Ok(envelope.session)
}

/// `POST /checkout/complete`
#[tracing::instrument(skip(client, payload), fields(checkout_id = %payload.checkout_id))]
pub async fn complete(client: &ApiClient, payload: &CompleteCheckout) -> Result<CheckoutSession> {
    let envelope: SessionEnvelope = client.post("/checkout/complete", payload).await?;
    Ok(envelope.session)
}

/// `GET /checkout/admin/sessions`
#[tracing::instrument(skip(client))]
pub async fn admin_sessions(client: &ApiClient, query: &PageQuery) -> Result<SessionPage> {
    let pairs = query.to_pairs();
    let envelope: SessionsEnvelope = if pairs.is_empty() {
        client.get("/checkout/admin/sessions").await?
    } else {
        client.get_with_query("/checkout/admin/sessions", pairs).await?
    };
    Ok(SessionPage {
        sessions: envelope.sessions,
        pagination: envelope.pagination,
    })
}

/// `GET /checkout/admin/stats`
#[tracing::instrument(skip(client))]
pub async fn admin_stats(client: &ApiClient) -> Result<CheckoutStats> {
    let envelope: StatsEnvelope = client.get("/checkout/admin/stats").await?;
    Ok(envelope.stats)
}
