use super::Engine;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    api::TrackingAPI,
    entities::{Coordinates, Party, RenderState, Viewport},
    error::Error,
};

#[async_trait]
impl TrackingAPI for Engine {
    async fn render_state(&self) -> RenderState {
        self.state.lock().await.render_state()
    }

    #[tracing::instrument(skip(self))]
    async fn select_party(&self, id: String) -> Result<Viewport, Error> {
        let mut state = self.state.lock().await;

        state.tracker.select_and_center(&id)
    }

    #[tracing::instrument(skip(self))]
    async fn update_party_location(
        &self,
        id: String,
        coordinates: Coordinates,
    ) -> Result<Party, Error> {
        let mut state = self.state.lock().await;

        state.move_party(&id, coordinates, Utc::now())
    }

    #[tracing::instrument(skip(self))]
    async fn drift_party(&self, id: String) -> Result<Party, Error> {
        let mut state = self.state.lock().await;

        state.drift_party(&id)
    }
}
