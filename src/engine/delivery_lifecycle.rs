use std::fmt;

use crate::{
    entities::{DeliveryState, DeliveryStatus, Party, Route, RouteStrategy, StraightLine},
    error::Error,
};

pub struct DeliveryLifecycle {
    state: DeliveryState,
    strategy: Box<dyn RouteStrategy>,
}

impl fmt::Debug for DeliveryLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryLifecycle")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for DeliveryLifecycle {
    fn default() -> Self {
        Self::new(Box::new(StraightLine))
    }
}

impl DeliveryLifecycle {
    pub fn new(strategy: Box<dyn RouteStrategy>) -> Self {
        Self {
            state: DeliveryState::new(),
            strategy,
        }
    }

    pub fn status(&self) -> DeliveryStatus {
        self.state.status
    }

    pub fn route(&self) -> &Route {
        &self.state.route
    }

    pub fn state(&self) -> &DeliveryState {
        &self.state
    }

    #[tracing::instrument(skip(self, parties))]
    pub fn start_delivery(&mut self, parties: &[Party]) -> Result<(), Error> {
        if let Err(err) = self.state.start() {
            tracing::warn!("start rejected while {}", self.state.status.name());
            return Err(err);
        }

        self.refresh_route(parties);

        tracing::info!("delivery started");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn complete_delivery(&mut self) -> Result<(), Error> {
        if let Err(err) = self.state.complete() {
            tracing::warn!("complete rejected while {}", self.state.status.name());
            return Err(err);
        }

        tracing::info!("delivery completed");

        Ok(())
    }

    /// Recomputes the route from the current positions. The route is only
    /// kept while in progress with both a deliverer and a customer known.
    pub fn refresh_route(&mut self, parties: &[Party]) {
        if !self.state.is_in_progress() {
            self.state.route.clear();
            return;
        }

        let deliverer = parties.iter().find(|p| p.is_deliverer());
        let customer = parties.iter().find(|p| p.is_customer());

        self.state.route = match (deliverer, customer) {
            (Some(deliverer), Some(customer)) => {
                self.strategy.compute_route(deliverer.coords, customer.coords)
            }
            _ => Route::empty(),
        };
    }
}
