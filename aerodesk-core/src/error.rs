/// Seat-level failures raised by a single flight.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid seat number {seat_number}: must be between 1 and {capacity}")]
    InvalidSeatNumber {
        seat_number: u32,
        capacity: u32,
    },

    #[error("Passenger name must not be empty")]
    EmptyPassengerName,

    #[error("Seat {seat_number} is already occupied")]
    SeatOccupied {
        seat_number: u32,
    },

    #[error("Seat {seat_number} is not occupied")]
    SeatNotOccupied {
        seat_number: u32,
    },
}

/// Failures raised while routing an operation through the inventory.
///
/// Flight-level errors are carried through untouched in [`InventoryError::Booking`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Flight {0} not found")]
    FlightNotFound(String),

    #[error("Flight {0} already exists")]
    DuplicateFlightNumber(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl InventoryError {
    /// The underlying seat error, if this failure came from the flight itself.
    pub fn booking(&self) -> Option<&BookingError> {
        match self {
            InventoryError::Booking(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_error_passes_through_unchanged() {
        let err: InventoryError = BookingError::SeatOccupied { seat_number: 4 }.into();

        assert_eq!(err.booking(), Some(&BookingError::SeatOccupied { seat_number: 4 }));
        assert_eq!(err.to_string(), "Seat 4 is already occupied");
    }

    #[test]
    fn test_inventory_error_messages() {
        assert_eq!(
            InventoryError::FlightNotFound("FL009".to_string()).to_string(),
            "Flight FL009 not found"
        );
        assert!(InventoryError::DuplicateFlightNumber("FL001".to_string()).booking().is_none());
    }
}
