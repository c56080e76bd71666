use geo_types::LineString;
use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    pub waypoints: Vec<Coordinates>,
}

impl Route {
    pub fn new(waypoints: Vec<Coordinates>) -> Self {
        Self { waypoints }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
    }
}

impl From<&Route> for LineString<f64> {
    fn from(route: &Route) -> Self {
        route
            .waypoints
            .iter()
            .map(|c| (c.longitude, c.latitude))
            .collect::<Vec<_>>()
            .into()
    }
}

pub trait RouteStrategy: Send + Sync {
    fn compute_route(&self, origin: Coordinates, destination: Coordinates) -> Route;
}

/// Stand-in for real routing: the two endpoints joined directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct StraightLine;

impl RouteStrategy for StraightLine {
    fn compute_route(&self, origin: Coordinates, destination: Coordinates) -> Route {
        Route::new(vec![origin, destination])
    }
}
