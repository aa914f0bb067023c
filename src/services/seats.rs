//! Seat and seat type operations.

use crate::client::HavenClient;
use crate::envelope::{ActionResult, ItemResult, ListResult};
use crate::errors::HavenResult;
use crate::types::{Paging, Seat, SeatType};
use uuid::Uuid;

/// Service for seat operations.
pub struct SeatsService<'a> {
    client: &'a HavenClient,
}

impl<'a> SeatsService<'a> {
    /// Creates a new seats service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Lists seat types of a faction.
    pub async fn types_by_faction(
        &self,
        faction_id: Uuid,
        paging: Paging,
    ) -> HavenResult<ListResult<SeatType>> {
        self.client
            .get_with_params(&format!("/seattype/by_faction/{}", faction_id), &paging)
            .await
    }

    /// Creates a seat.
    pub async fn create(&self, seat: &Seat) -> HavenResult<ItemResult<Seat>> {
        self.client.post("/seat", seat).await
    }

    /// Removes a principal from its seat.
    ///
    /// Deleting the seat resource itself is possible on the server but may
    /// invalidate data attached to the seat; this call is the targeted way.
    pub async fn remove(&self, seat_id: Uuid) -> HavenResult<ActionResult> {
        self.client
            .post(&format!("/seats/{}/remove", seat_id), &())
            .await
    }
}
