use serde::Deserialize;

use crate::client::ApiClient;
use crate::models::{
    ApproveCustomRequest, CustomFoodRequest, NewCustomFoodRequest, PageQuery, Pagination,
    RejectCustomRequest,
};
use crate::Result;

#[derive(Deserialize)]
struct RequestsEnvelope {
    requests: Vec<CustomFoodRequest>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Deserialize)]
struct RequestEnvelope {
    request: CustomFoodRequest,
}

pub struct RequestPage {
    pub requests: Vec<CustomFoodRequest>,
    pub pagination: Option<Pagination>,
}

/// `POST /custom-food-requests`
#[tracing::instrument(skip(client, request), fields(title = %request.request_title))]
pub async fn create(
    client: &ApiClient,
    request: &NewCustomFoodRequest,
) -> Result<CustomFoodRequest> {
    let envelope: RequestEnvelope = client.post("/custom-food-requests", request).await?;
    Ok(envelope.request)
}

/// `GET /custom-food-requests/user`, optionally filtered by status
#[tracing::instrument(skip(client))]
pub async fn list_mine(
    client: &ApiClient,
    status: Option<&str>,
) -> Result<Vec<CustomFoodRequest>> {
    let envelope: RequestsEnvelope = match status {
        Some(status) => {
            client
                .get_with_query(
                    "/custom-food-requests/user",
                    vec![("status".to_string(), status.to_string())],
                )
                .await?
        }
        None => client.get("/custom-food-requests/user").await?,
    };
    Ok(envelope.requests)
}

/// `POST /custom-food-requests/{id}/cancel`
#[tracing::instrument(skip(client))]
pub async fn cancel(client: &ApiClient, id: &str) -> Result<CustomFoodRequest> {
    let envelope: RequestEnvelope = client
        .post_empty(&format!("/custom-food-requests/{}/cancel", id))
        .await?;
    Ok(envelope.request)
}

/// `GET /custom-food-requests/admin/all`
#[tracing::instrument(skip(client))]
pub async fn admin_list(client: &ApiClient, query: &PageQuery) -> Result<RequestPage> {
    let pairs = query.to_pairs();
    let envelope: RequestsEnvelope = if pairs.is_empty() {
        client.get("/custom-food-requests/admin/all").await?
    } else {
        client
            .get_with_query("/custom-food-requests/admin/all", pairs)
            .await?
    };
    Ok(RequestPage {
        requests: envelope.requests,
        pagination: envelope.pagination,
    })
}

/// `POST /custom-food-requests/admin/{id}/approve`
#[tracing::instrument(skip(client, payload))]
pub async fn approve(
    client: &ApiClient,
    id: &str,
    payload: &ApproveCustomRequest,
) -> Result<CustomFoodRequest> {
    let envelope: RequestEnvelope = client
        .post(&format!("/custom-food-requests/admin/{}/approve", id), payload)
        .await?;
    Ok(envelope.request)
}

/// `POST /custom-food-requests/admin/{id}/reject`
#[tracing::instrument(skip(client, payload))]
pub async fn reject(
    client: &ApiClient,
    id: &str,
    payload: &RejectCustomRequest,
) -> Result<CustomFoodRequest> {
    let envelope: RequestEnvelope = client
        .post(&format!("/custom-food-requests/admin/{}/reject", id), payload)
        .await?;
    Ok(envelope.request)
}
