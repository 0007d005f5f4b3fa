use serde::Deserialize;

use crate::client::ApiClient;
use crate::models::{Booking, NewBooking};
use crate::Result;

#[derive(Deserialize)]
struct BookingsEnvelope {
    bookings: Vec<Booking>,
}

#[derive(Deserialize)]
struct BookingEnvelope {
    booking: Booking,
}

/// `GET /bookings` - the caller's own bookings
#[tracing::instrument(skip(client))]
pub async fn list_mine(client: &ApiClient) -> Result<Vec<Booking>> {
    let envelope: BookingsEnvelope = client.get("/bookings").await?;
    Ok(envelope.bookings)
}

/// `GET /bookings/{id}`
#[tracing::instrument(skip(client))]
pub async fn find(client: &ApiClient, id: &str) -> Result<Booking> {
    let envelope: BookingEnvelope = client.get(&format!("/bookings/{}", id)).await?;
    Ok(envelope.booking)
}

/// `POST /bookings`
#[tracing::instrument(skip(client, booking), fields(room_id = %booking.room_id))]
pub async fn create(client: &ApiClient, booking: &NewBooking) -> Result<Booking> {
    let envelope: BookingEnvelope = client.post("/bookings", booking).await?;
    Ok(envelope.booking)
}
