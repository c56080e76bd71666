mod delivery;
mod location;
mod party;
mod render;
mod route;
mod viewport;

pub use delivery::{DeliveryState, Status as DeliveryStatus};
pub use location::Coordinates;
pub use party::{reference_parties, Party, Role};
pub use render::RenderState;
pub use route::{Route, RouteStrategy, StraightLine};
pub use viewport::{Viewport, DEFAULT_CENTER, LATITUDE_DELTA};
