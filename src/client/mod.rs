use std::time::Duration;

use thiserror::Error;

use crate::model::{NewRoom, Room, RoomId};

const COLLECTION: &str = "habitaciones";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("server returned {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("could not decode server response: {0}")]
    Decode(reqwest::Error),
}

/// Thin client over the room collection endpoint. One request per call,
/// no retries; callers decide what to re-fetch afterwards.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, COLLECTION)
    }

    fn room_url(&self, id: &RoomId) -> String {
        format!("{}/{}/{}", self.base_url, COLLECTION, id.path_segment())
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(|e| {
            log::debug!("transport failure: {e}");
            ClientError::Transport(e)
        })?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("request to {} failed with {status}", response.url());
            return Err(ClientError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }
        Ok(response)
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>, ClientError> {
        let response = self.execute(self.http.get(self.collection_url())).await?;
        response.json::<Vec<Room>>().await.map_err(ClientError::Decode)
    }

    pub async fn create_room(&self, room: &NewRoom) -> Result<Room, ClientError> {
        let response = self
            .execute(self.http.post(self.collection_url()).json(room))
            .await?;
        response.json::<Room>().await.map_err(ClientError::Decode)
    }

    /// PUT of the full record, id included; only `reservada` ever changes
    /// post-creation but the server expects the complete room back.
    pub async fn update_room(&self, room: &Room) -> Result<Room, ClientError> {
        let response = self
            .execute(self.http.put(self.room_url(&room.id)).json(room))
            .await?;
        response.json::<Room>().await.map_err(ClientError::Decode)
    }

    pub async fn delete_room(&self, id: &RoomId) -> Result<(), ClientError> {
        self.execute(self.http.delete(self.room_url(id))).await?;
        Ok(())
    }
}
