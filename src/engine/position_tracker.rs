use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    entities::{Coordinates, Party, Role, Viewport},
    error::{invalid_seed_error, permission_denied_error, unknown_party_error, Error},
    external::Permission,
    simulation::DriftSource,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub parties: Vec<Party>,
    pub viewport: Viewport,
    pub selected_party_id: Option<String>,
}

#[derive(Debug)]
pub struct PositionTracker {
    parties: Vec<Party>,
    viewport: Viewport,
    selected: Option<String>,
}

impl PositionTracker {
    pub fn new(aspect_ratio: f64) -> Self {
        Self {
            parties: vec![],
            viewport: Viewport::new(aspect_ratio),
            selected: None,
        }
    }

    /// Replaces the tracked set with `seeds` and centers on the deliverer.
    ///
    /// The previous set is dropped first, so a denied permission or invalid
    /// seeds leave nothing tracked. Seeds must hold unique ids and exactly one
    /// deliverer and one customer.
    #[tracing::instrument(skip(self, seeds))]
    pub fn initialize(&mut self, seeds: Vec<Party>, permission: Permission) -> Result<(), Error> {
        self.clear();

        if !permission.is_granted() {
            return Err(permission_denied_error());
        }

        validate_seeds(&seeds)?;

        self.parties = seeds;

        let deliverer_id = self.find_by_role(Role::Deliverer).map(|p| p.id.clone());
        if let Some(id) = deliverer_id {
            self.select_and_center(&id)?;
        }

        tracing::info!("tracking {} parties", self.parties.len());

        Ok(())
    }

    pub fn clear(&mut self) {
        self.parties.clear();
        self.selected = None;
    }

    pub fn is_tracking(&self) -> bool {
        !self.parties.is_empty()
    }

    #[tracing::instrument(skip(self))]
    pub fn apply_position_update(&mut self, id: &str, coords: Coordinates) -> Result<(), Error> {
        let party = self
            .parties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(unknown_party_error)?;

        party.coords = coords;

        if self.selected.as_deref() == Some(id) {
            self.viewport.center_on(coords);
        }

        Ok(())
    }

    pub fn simulate_drift(
        &mut self,
        id: &str,
        source: &mut dyn DriftSource,
    ) -> Result<Coordinates, Error> {
        let current = self.find(id).ok_or_else(unknown_party_error)?.coords;
        let (latitude_offset, longitude_offset) = source.next_offset();
        let moved = current.offset(latitude_offset, longitude_offset);

        self.apply_position_update(id, moved)?;

        Ok(moved)
    }

    #[tracing::instrument(skip(self))]
    pub fn select_and_center(&mut self, id: &str) -> Result<Viewport, Error> {
        let coords = self.find(id).ok_or_else(unknown_party_error)?.coords;

        self.selected = Some(id.to_string());
        self.viewport.center_on(coords);

        Ok(self.viewport)
    }

    pub fn find(&self, id: &str) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    pub fn find_by_role(&self, role: Role) -> Option<&Party> {
        self.parties.iter().find(|p| p.role == role)
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            parties: self.parties.clone(),
            viewport: self.viewport,
            selected_party_id: self.selected.clone(),
        }
    }
}

fn validate_seeds(seeds: &[Party]) -> Result<(), Error> {
    let mut ids = HashSet::new();
    if !seeds.iter().all(|p| ids.insert(p.id.as_str())) {
        return Err(invalid_seed_error());
    }

    let deliverers = seeds.iter().filter(|p| p.is_deliverer()).count();
    let customers = seeds.iter().filter(|p| p.is_customer()).count();

    if deliverers != 1 || customers != 1 {
        return Err(invalid_seed_error());
    }

    Ok(())
}
