use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Deliverer,
    Customer,
}

impl Role {
    pub fn name(&self) -> String {
        match self {
            Self::Deliverer => "deliverer".into(),
            Self::Customer => "customer".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub coords: Coordinates,
}

impl Party {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        coords: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            coords,
        }
    }

    pub fn is_deliverer(&self) -> bool {
        self.role == Role::Deliverer
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}

/// Deliverer and customer seeded in central Paris.
pub fn reference_parties() -> Vec<Party> {
    vec![
        Party::new(
            "person1",
            "Livreur",
            Role::Deliverer,
            Coordinates::new(48.8566, 2.3522),
        ),
        Party::new(
            "person2",
            "Client",
            Role::Customer,
            Coordinates::new(48.8606, 2.3376),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_parties_have_one_of_each_role() {
        let parties = reference_parties();

        assert_eq!(parties.len(), 2);
        assert_eq!(parties.iter().filter(|p| p.is_deliverer()).count(), 1);
        assert_eq!(parties.iter().filter(|p| p.is_customer()).count(), 1);
    }

    #[test]
    fn role_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::Deliverer).unwrap(),
            "\"deliverer\""
        );
        assert_eq!(Role::Customer.name(), "customer");
    }
}
