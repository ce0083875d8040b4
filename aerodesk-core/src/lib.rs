pub mod error;
pub mod fare_class;
pub mod seat;
pub mod flight;
pub mod inventory;

pub use error::{BookingError, InventoryError};
pub use fare_class::FareClass;
pub use seat::Seat;
pub use flight::{Availability, FareClassMap, Flight, FlightSummary, SeatMapEntry};
pub use inventory::Inventory;

pub type BookingResult<T> = Result<T, BookingError>;
pub type InventoryResult<T> = Result<T, InventoryError>;
