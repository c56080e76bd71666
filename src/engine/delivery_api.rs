use super::Engine;

use async_trait::async_trait;

use crate::{api::DeliveryAPI, entities::DeliveryState, error::Error};

#[async_trait]
impl DeliveryAPI for Engine {
    async fn delivery_state(&self) -> DeliveryState {
        self.state.lock().await.lifecycle.state().clone()
    }

    #[tracing::instrument(skip(self))]
    async fn start_delivery(&self) -> Result<DeliveryState, Error> {
        let mut state = self.state.lock().await;

        let super::State {
            tracker, lifecycle, ..
        } = &mut *state;
        lifecycle.start_delivery(tracker.parties())?;

        Ok(lifecycle.state().clone())
    }

    #[tracing::instrument(skip(self))]
    async fn complete_delivery(&self) -> Result<DeliveryState, Error> {
        let mut state = self.state.lock().await;

        state.lifecycle.complete_delivery()?;

        Ok(state.lifecycle.state().clone())
    }
}
