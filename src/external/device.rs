use std::str::FromStr;

use async_channel::Sender;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    entities::Coordinates,
    error::{env_var_error, Error},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Granted,
    Denied,
}

impl Permission {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            other => Err(env_var_error(other)),
        }
    }
}

#[async_trait]
pub trait PermissionProvider: Send + Sync {
    async fn request_foreground_permission(&self) -> Permission;
}

#[derive(Clone, Copy, Debug)]
pub struct StaticPermission(pub Permission);

#[async_trait]
impl PermissionProvider for StaticPermission {
    async fn request_foreground_permission(&self) -> Permission {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PositionEvent {
    Fix {
        party_id: String,
        coordinates: Coordinates,
        timestamp: DateTime<Utc>,
    },
    Drift { party_id: String },
}

impl PositionEvent {
    pub fn fix(party_id: impl Into<String>, coordinates: Coordinates) -> Self {
        Self::Fix {
            party_id: party_id.into(),
            coordinates,
            timestamp: Utc::now(),
        }
    }

    pub fn party_id(&self) -> &str {
        match self {
            Self::Fix { party_id, .. } | Self::Drift { party_id } => party_id,
        }
    }
}

/// Live registration with a position source. Cancelling must stop delivery
/// of further events; it may be called more than once.
pub trait Subscription: Send {
    fn cancel(&mut self);
}

pub trait PositionProvider: Send + Sync {
    fn subscribe(&self, sender: Sender<PositionEvent>) -> Box<dyn Subscription>;
}
