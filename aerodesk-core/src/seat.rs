use serde::{Deserialize, Serialize};

/// A single reservable seat.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Seat {
    #[default]
    Vacant,
    Occupied {
        passenger: String,
    },
}

impl Seat {
    /// Assign the seat to `passenger`, replacing any current occupant.
    ///
    /// Callers are expected to check [`Seat::is_occupied`] first.
    pub fn occupy(&mut self, passenger: impl Into<String>) {
        *self = Seat::Occupied {
            passenger: passenger.into(),
        };
    }

    pub fn vacate(&mut self) {
        *self = Seat::Vacant;
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Seat::Occupied { .. })
    }

    pub fn occupant(&self) -> Option<&str> {
        match self {
            Seat::Occupied { passenger } => Some(passenger),
            Seat::Vacant => None,
        }
    }
}
