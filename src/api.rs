use async_trait::async_trait;

use crate::entities::{Coordinates, DeliveryState, Party, RenderState, Viewport};
use crate::error::Error;

#[async_trait]
pub trait TrackingAPI {
    async fn render_state(&self) -> RenderState;
    async fn select_party(&self, id: String) -> Result<Viewport, Error>;
    async fn update_party_location(
        &self,
        id: String,
        coordinates: Coordinates,
    ) -> Result<Party, Error>;
    async fn drift_party(&self, id: String) -> Result<Party, Error>;
}

#[async_trait]
pub trait DeliveryAPI {
    async fn delivery_state(&self) -> DeliveryState;
    async fn start_delivery(&self) -> Result<DeliveryState, Error>;
    async fn complete_delivery(&self) -> Result<DeliveryState, Error>;
}

pub trait API: TrackingAPI + DeliveryAPI {}
