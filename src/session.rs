use std::sync::Arc;

use futures::StreamExt;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    engine::Engine,
    entities::Party,
    error::Error,
    external::{PermissionProvider, PositionProvider, Subscription},
};

pub struct TrackingSession {
    pub id: Uuid,
    subscription: Box<dyn Subscription>,
    pump: Option<JoinHandle<()>>,
}

impl TrackingSession {
    #[tracing::instrument(name = "TrackingSession::start", skip_all)]
    pub async fn start(
        engine: Arc<Engine>,
        permissions: &dyn PermissionProvider,
        positions: &dyn PositionProvider,
        seeds: Vec<Party>,
    ) -> Result<Self, Error> {
        let permission = permissions.request_foreground_permission().await;

        if let Err(err) = engine.initialize(seeds, permission).await {
            if err.is_permission_denied_error() {
                tracing::warn!("location permission denied, tracking not started");
            }

            return Err(err);
        }

        let (tx, rx) = async_channel::unbounded();
        let subscription = positions.subscribe(tx);

        let pump = tokio::spawn(async move {
            let mut events = Box::pin(rx);

            while let Some(event) = events.next().await {
                let party_id = event.party_id().to_string();

                if let Err(err) = engine.apply_event(event).await {
                    tracing::warn!("dropped position event for {}: {}", party_id, err);
                }
            }
        });

        let id = Uuid::new_v4();

        tracing::info!("tracking session {} started", id);

        Ok(Self {
            id,
            subscription,
            pump: Some(pump),
        })
    }

    /// Cancels the subscription and waits for the pump to finish. No event
    /// is applied once this returns.
    #[tracing::instrument(name = "TrackingSession::stop", skip_all, fields(id = %self.id))]
    pub async fn stop(mut self) {
        self.subscription.cancel();

        if let Some(pump) = self.pump.take() {
            pump.abort();
            let _ = pump.await;
        }

        tracing::info!("tracking session stopped");
    }
}

impl Drop for TrackingSession {
    fn drop(&mut self) {
        self.subscription.cancel();

        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
    }
}
