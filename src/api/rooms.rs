use serde::Deserialize;

use crate::client::ApiClient;
use crate::models::Room;
use crate::Result;

// The rooms endpoints answer both enveloped and bare depending on the API
// version deployed; accept either shape rather than guessing

#[derive(Deserialize)]
#[serde(untagged)]
enum RoomsResponse {
    Enveloped { rooms: Vec<Room> },
    Bare(Vec<Room>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoomResponse {
    Enveloped { room: Room },
    Bare(Room),
}

/// `GET /rooms`
#[tracing::instrument(skip(client))]
pub async fn list(client: &ApiClient) -> Result<Vec<Room>> {
    let response: RoomsResponse = client.get("/rooms").await?;
    Ok(match response {
        RoomsResponse::Enveloped { rooms } => rooms,
        RoomsResponse::Bare(rooms) => rooms,
    })
}

/// `GET /rooms/{id}`
#[tracing::instrument(skip(client))]
pub async fn find(client: &ApiClient, id: &str) -> Result<Room> {
    let response: RoomResponse = client.get(&format!("/rooms/{}", id)).await?;
    Ok(match response {
        RoomResponse::Enveloped { room } => room,
        RoomResponse::Bare(room) => room,
    })
}
