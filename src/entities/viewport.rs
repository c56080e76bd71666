use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

pub const LATITUDE_DELTA: f64 = 0.0922;

/// Center shown before any party is tracked.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: 48.8566,
    longitude: 2.3522,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Viewport {
    pub fn new(aspect_ratio: f64) -> Self {
        Self {
            latitude: DEFAULT_CENTER.latitude,
            longitude: DEFAULT_CENTER.longitude,
            latitude_delta: LATITUDE_DELTA,
            longitude_delta: LATITUDE_DELTA * aspect_ratio,
        }
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn center_on(&mut self, coordinates: Coordinates) {
        self.latitude = coordinates.latitude;
        self.longitude = coordinates.longitude;
    }
}
