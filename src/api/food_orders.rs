use serde::Deserialize;

use crate::client::ApiClient;
use crate::models::{FoodOrder, NewFoodOrder};
use crate::Result;

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<FoodOrder>,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: FoodOrder,
}

/// `POST /food-orders`
#[tracing::instrument(skip(client, order), fields(lines = order.items.len()))]
pub async fn create(client: &ApiClient, order: &NewFoodOrder) -> Result<FoodOrder> {
    let envelope: OrderEnvelope = client.post("/food-orders", order).await?;
    Ok(envelope.order)
}

/// `GET /food-orders` - the caller's own orders
#[tracing::instrument(skip(client))]
pub async fn list_mine(client: &ApiClient) -> Result<Vec<FoodOrder>> {
    let envelope: OrdersEnvelope = client.get("/food-orders").await?;
    Ok(envelope.orders)
}

/// `GET /food-orders/{id}`
#[tracing::instrument(skip(client))]
pub async fn find(client: &ApiClient, id: &str) -> Result<FoodOrder> {
    let envelope: OrderEnvelope = client.get(&format!("/food-orders/{}", id)).await?;
    Ok(envelope.order)
}

/// `PUT /food-orders/{id}/cancel`
#[tracing::instrument(skip(client))]
pub async fn cancel(client: &ApiClient, id: &str) -> Result<FoodOrder> {
    let envelope: OrderEnvelope = client
        .put_empty(&format!("/food-orders/{}/cancel", id))
        .await?;
    Ok(envelope.order)
}
