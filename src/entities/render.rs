use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{DeliveryStatus, Party, Route, Viewport};
use crate::external::Permission;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub parties: Vec<Party>,
    pub viewport: Viewport,
    pub selected_party_id: Option<String>,
    pub delivery_status: DeliveryStatus,
    pub route: Route,
    /// `None` until the device has answered the permission prompt.
    pub permission: Option<Permission>,
    pub last_update: Option<DateTime<Utc>>,
}
