use crate::error::InventoryError;
use crate::fare_class::FareClass;
use crate::flight::{Flight, FlightSummary, SeatMapEntry};
use crate::InventoryResult;

/// In-memory seat inventory across all flights.
///
/// Flights are kept in insertion order and looked up by a linear scan on the
/// flight number, which is unique within the inventory.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    flights: Vec<Flight>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            flights: Vec::new(),
        }
    }

    /// Build an inventory from a fleet, rejecting duplicate flight numbers.
    pub fn with_flights(flights: impl IntoIterator<Item = Flight>) -> InventoryResult<Self> {
        let mut inventory = Self::new();
        for flight in flights {
            inventory.add_flight(flight)?;
        }
        Ok(inventory)
    }

    /// Register a flight. Fails if its number is already taken.
    pub fn add_flight(&mut self, flight: Flight) -> InventoryResult<()> {
        if self.find_flight(flight.number()).is_some() {
            return Err(InventoryError::DuplicateFlightNumber(flight.number().to_string()));
        }
        self.flights.push(flight);
        Ok(())
    }

    pub fn find_flight(&self, number: &str) -> Option<&Flight> {
        self.flights.iter().find(|flight| flight.number() == number)
    }

    pub fn book_ticket(
        &mut self,
        number: &str,
        class: FareClass,
        passenger_name: &str,
        seat_number: u32,
    ) -> InventoryResult<()> {
        let flight = self.flight_mut(number)?;
        flight.book_ticket(class, passenger_name, seat_number)?;
        Ok(())
    }

    pub fn cancel_ticket(
        &mut self,
        number: &str,
        class: FareClass,
        seat_number: u32,
    ) -> InventoryResult<()> {
        let flight = self.flight_mut(number)?;
        flight.cancel_ticket(class, seat_number)?;
        Ok(())
    }

    pub fn seat_map(&self, number: &str, class: FareClass) -> InventoryResult<Vec<SeatMapEntry>> {
        self.find_flight(number)
            .map(|flight| flight.seat_map(class))
            .ok_or_else(|| InventoryError::FlightNotFound(number.to_string()))
    }

    /// Summaries of every flight, in insertion order.
    pub fn list_flights(&self) -> impl Iterator<Item = FlightSummary> + '_ {
        self.flights.iter().map(Flight::summary)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Hand the flights over to another owner, e.g. a lock-per-flight wrapper.
    pub fn into_flights(self) -> Vec<Flight> {
        self.flights
    }

    fn flight_mut(&mut self, number: &str) -> InventoryResult<&mut Flight> {
        self.flights
            .iter_mut()
            .find(|flight| flight.number() == number)
            .ok_or_else(|| InventoryError::FlightNotFound(number.to_string()))
    }
}
