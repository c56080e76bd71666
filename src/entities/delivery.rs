use serde::{Deserialize, Serialize};

use crate::entities::Route;
use crate::error::{invalid_transition_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Pending => "pending".into(),
            Self::InProgress => "in_progress".into(),
            Self::Completed => "completed".into(),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryState {
    pub status: Status,
    pub route: Route,
}

impl DeliveryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, Status::InProgress)
    }

    pub fn start(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Pending => {
                self.status = Status::InProgress;
                Ok(())
            }
            _ => Err(invalid_transition_error()),
        }
    }

    pub fn complete(&mut self) -> Result<(), Error> {
        match self.status {
            Status::InProgress => {
                self.status = Status::Completed;
                self.route.clear();
                Ok(())
            }
            _ => Err(invalid_transition_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Coordinates;

    #[test]
    fn forward_transitions() {
        let mut state = DeliveryState::new();
        assert_eq!(state.status, Status::Pending);

        state.start().unwrap();
        assert_eq!(state.status, Status::InProgress);

        state.complete().unwrap();
        assert_eq!(state.status, Status::Completed);
    }

    #[test]
    fn complete_requires_in_progress() {
        let mut state = DeliveryState::new();

        let err = state.complete().unwrap_err();
        assert!(err.is_invalid_transition_error());
        assert_eq!(state.status, Status::Pending);
    }

    #[test]
    fn completed_is_terminal() {
        let mut state = DeliveryState::new();
        state.start().unwrap();
        state.complete().unwrap();

        assert!(state.start().is_err());
        assert!(state.complete().is_err());
        assert_eq!(state.status, Status::Completed);
    }

    #[test]
    fn rejected_start_keeps_route() {
        let mut state = DeliveryState::new();
        state.start().unwrap();
        state.route = Route::new(vec![Coordinates::new(1.0, 1.0), Coordinates::new(2.0, 2.0)]);

        assert!(state.start().is_err());
        assert_eq!(state.route.len(), 2);
    }

    #[test]
    fn status_names() {
        assert_eq!(Status::InProgress.name(), "in_progress");
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}
