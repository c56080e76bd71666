mod delivery_api;
mod delivery_lifecycle;
mod position_tracker;
mod tracking_api;

pub use delivery_lifecycle::DeliveryLifecycle;
pub use position_tracker::{PositionTracker, TrackerSnapshot};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::{
    api::API,
    entities::{Coordinates, Party, RenderState, RouteStrategy, StraightLine},
    error::{unknown_party_error, Error},
    external::{Permission, PositionEvent},
    simulation::DriftSource,
};

/// Everything guarded by the engine lock. Each operation runs to completion
/// while holding it, so readers never observe a half-applied update.
struct State {
    tracker: PositionTracker,
    lifecycle: DeliveryLifecycle,
    drift: Box<dyn DriftSource>,
    permission: Option<Permission>,
    last_update: Option<DateTime<Utc>>,
}

impl State {
    fn move_party(
        &mut self,
        id: &str,
        coordinates: Coordinates,
        timestamp: DateTime<Utc>,
    ) -> Result<Party, Error> {
        self.tracker.apply_position_update(id, coordinates)?;
        self.after_move(id, timestamp)
    }

    fn drift_party(&mut self, id: &str) -> Result<Party, Error> {
        self.tracker.simulate_drift(id, self.drift.as_mut())?;
        self.after_move(id, Utc::now())
    }

    fn after_move(&mut self, id: &str, timestamp: DateTime<Utc>) -> Result<Party, Error> {
        self.lifecycle.refresh_route(self.tracker.parties());
        self.last_update = Some(timestamp);

        let party = self.tracker.find(id).cloned();
        party.ok_or_else(unknown_party_error)
    }

    fn render_state(&self) -> RenderState {
        let TrackerSnapshot {
            parties,
            viewport,
            selected_party_id,
        } = self.tracker.snapshot();

        RenderState {
            parties,
            viewport,
            selected_party_id,
            delivery_status: self.lifecycle.status(),
            route: self.lifecycle.route().clone(),
            permission: self.permission,
            last_update: self.last_update,
        }
    }
}

pub struct Engine {
    state: Mutex<State>,
}

impl Engine {
    pub fn new(aspect_ratio: f64, drift: Box<dyn DriftSource>) -> Self {
        Self::with_route_strategy(aspect_ratio, drift, Box::new(StraightLine))
    }

    pub fn with_route_strategy(
        aspect_ratio: f64,
        drift: Box<dyn DriftSource>,
        strategy: Box<dyn RouteStrategy>,
    ) -> Self {
        let state = State {
            tracker: PositionTracker::new(aspect_ratio),
            lifecycle: DeliveryLifecycle::new(strategy),
            drift,
            permission: None,
            last_update: None,
        };

        Self {
            state: Mutex::new(state),
        }
    }

    #[tracing::instrument(name = "Engine::initialize", skip(self, seeds))]
    pub async fn initialize(
        &self,
        seeds: Vec<Party>,
        permission: Permission,
    ) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        state.permission = Some(permission);

        let result = state.tracker.initialize(seeds, permission);

        let State {
            tracker, lifecycle, ..
        } = &mut *state;
        lifecycle.refresh_route(tracker.parties());

        result
    }

    #[tracing::instrument(name = "Engine::apply_event", skip(self))]
    pub async fn apply_event(&self, event: PositionEvent) -> Result<Party, Error> {
        let mut state = self.state.lock().await;

        match event {
            PositionEvent::Fix {
                party_id,
                coordinates,
                timestamp,
            } => state.move_party(&party_id, coordinates, timestamp),
            PositionEvent::Drift { party_id } => state.drift_party(&party_id),
        }
    }

    pub async fn is_tracking(&self) -> bool {
        self.state.lock().await.tracker.is_tracking()
    }
}

impl API for Engine {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DeliveryAPI, TrackingAPI};
    use crate::entities::{reference_parties, DeliveryStatus, DEFAULT_CENTER};
    use crate::simulation::ScriptedDrift;
    use tokio_test::block_on;

    fn engine(offsets: Vec<(f64, f64)>) -> Engine {
        Engine::new(0.5, Box::new(ScriptedDrift::new(offsets)))
    }

    #[test]
    fn render_state_before_initialize_uses_fallback() {
        let engine = engine(vec![]);
        let state = block_on(engine.render_state());

        assert!(state.parties.is_empty());
        assert_eq!(state.viewport.center(), DEFAULT_CENTER);
        assert_eq!(state.delivery_status, DeliveryStatus::Pending);
        assert!(state.route.is_empty());
        assert_eq!(state.permission, None);
        assert_eq!(state.last_update, None);
    }

    #[test]
    fn denied_initialize_is_surfaced() {
        let engine = engine(vec![]);

        let err =
            block_on(engine.initialize(reference_parties(), Permission::Denied)).unwrap_err();
        let state = block_on(engine.render_state());

        assert!(err.is_permission_denied_error());
        assert!(state.parties.is_empty());
        assert_eq!(state.permission, Some(Permission::Denied));
        assert!(!block_on(engine.is_tracking()));
    }

    #[test]
    fn invalid_restart_clears_tracking_and_route() {
        let engine = engine(vec![]);
        block_on(engine.initialize(reference_parties(), Permission::Granted)).unwrap();
        block_on(engine.start_delivery()).unwrap();

        let mut seeds = reference_parties();
        seeds[1].role = crate::entities::Role::Deliverer;
        let err = block_on(engine.initialize(seeds, Permission::Granted)).unwrap_err();
        let state = block_on(engine.render_state());

        assert!(err.is_invalid_seed_error());
        assert!(state.parties.is_empty());
        assert!(state.route.is_empty());
        assert_eq!(state.delivery_status, DeliveryStatus::InProgress);
        assert_eq!(state.permission, Some(Permission::Granted));
        assert!(!block_on(engine.is_tracking()));
    }

    #[test]
    fn fix_event_moves_party_and_route() {
        let engine = engine(vec![]);
        block_on(engine.initialize(reference_parties(), Permission::Granted)).unwrap();
        block_on(engine.start_delivery()).unwrap();

        let moved = Coordinates::new(48.857, 2.35);
        block_on(engine.apply_event(PositionEvent::fix("person1", moved))).unwrap();
        let state = block_on(engine.render_state());

        assert_eq!(state.route.waypoints[0], moved);
        assert_eq!(state.viewport.center(), moved);
        assert!(state.last_update.is_some());
    }

    #[test]
    fn drift_event_uses_injected_source() {
        let engine = engine(vec![(0.001, 0.0)]);
        block_on(engine.initialize(reference_parties(), Permission::Granted)).unwrap();

        let party = block_on(engine.apply_event(PositionEvent::Drift {
            party_id: "person1".into(),
        }))
        .unwrap();

        assert!((party.coords.latitude - 48.8576).abs() < 1e-9);
        assert_eq!(party.coords.longitude, 2.3522);
    }

    #[test]
    fn unknown_event_changes_nothing() {
        let engine = engine(vec![]);
        block_on(engine.initialize(reference_parties(), Permission::Granted)).unwrap();
        let before = block_on(engine.render_state());

        let err = block_on(engine.apply_event(PositionEvent::fix(
            "unknown-id",
            Coordinates::new(0.0, 0.0),
        )))
        .unwrap_err();

        assert!(err.is_unknown_party_error());
        assert_eq!(block_on(engine.render_state()), before);
    }

    #[test]
    fn route_present_iff_in_progress_with_both_parties() {
        let engine = engine(vec![]);
        block_on(engine.initialize(reference_parties(), Permission::Granted)).unwrap();

        let state = block_on(engine.render_state());
        assert!(state.route.is_empty());

        block_on(engine.start_delivery()).unwrap();
        let state = block_on(engine.render_state());
        assert_eq!(state.route.len(), 2);

        block_on(engine.complete_delivery()).unwrap();
        let state = block_on(engine.render_state());
        assert!(state.route.is_empty());

        // moves after completion never bring the route back
        block_on(engine.update_party_location("person1".into(), Coordinates::new(1.0, 1.0)))
            .unwrap();
        assert!(block_on(engine.render_state()).route.is_empty());
    }
}
