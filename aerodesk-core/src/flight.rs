use serde::{Deserialize, Serialize};
use crate::error::BookingError;
use crate::fare_class::FareClass;
use crate::seat::Seat;
use crate::BookingResult;

/// Seats of one flight, partitioned by fare class.
///
/// Every class holds exactly `capacity` seats; index `n` is seat number `n + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareClassMap {
    economy: Vec<Seat>,
    business: Vec<Seat>,
    first: Vec<Seat>,
}

impl FareClassMap {
    pub fn new(capacity: u32) -> Self {
        let seats = || vec![Seat::Vacant; capacity as usize];
        Self {
            economy: seats(),
            business: seats(),
            first: seats(),
        }
    }

    pub fn seats(&self, class: FareClass) -> &[Seat] {
        match class {
            FareClass::Economy => &self.economy,
            FareClass::Business => &self.business,
            FareClass::First => &self.first,
        }
    }

    fn seats_mut(&mut self, class: FareClass) -> &mut [Seat] {
        match class {
            FareClass::Economy => &mut self.economy,
            FareClass::Business => &mut self.business,
            FareClass::First => &mut self.first,
        }
    }
}

/// One row of a seat map. `occupant` is `None` for a vacant seat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatMapEntry {
    pub seat_number: u32,
    pub occupant: Option<String>,
}

/// Vacant seat counts per fare class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub economy: usize,
    pub business: usize,
    pub first: usize,
}

impl Availability {
    pub fn get(&self, class: FareClass) -> usize {
        match class {
            FareClass::Economy => self.economy,
            FareClass::Business => self.business,
            FareClass::First => self.first,
        }
    }
}

/// Read-only projection of a flight for listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightSummary {
    pub number: String,
    pub origin: String,
    pub destination: String,
    pub capacity: u32,
    pub available: Availability,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    number: String,
    origin: String,
    destination: String,
    capacity: u32,
    seats: FareClassMap,
}

impl Flight {
    pub fn new(
        number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            number: number.into(),
            origin: origin.into(),
            destination: destination.into(),
            capacity,
            seats: FareClassMap::new(capacity),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Seats per fare class.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn seats(&self) -> &FareClassMap {
        &self.seats
    }

    pub fn available_seat_count(&self, class: FareClass) -> usize {
        self.seats.seats(class).iter().filter(|seat| !seat.is_occupied()).count()
    }

    pub fn occupied_seat_count(&self, class: FareClass) -> usize {
        self.capacity as usize - self.available_seat_count(class)
    }

    /// Book `seat_number` (1-based) in `class` for `passenger_name`.
    pub fn book_ticket(
        &mut self,
        class: FareClass,
        passenger_name: &str,
        seat_number: u32,
    ) -> BookingResult<()> {
        let index = self.seat_index(seat_number)?;
        let passenger_name = passenger_name.trim();
        if passenger_name.is_empty() {
            return Err(BookingError::EmptyPassengerName);
        }

        let seat = &mut self.seats.seats_mut(class)[index];
        if seat.is_occupied() {
            return Err(BookingError::SeatOccupied { seat_number });
        }

        seat.occupy(passenger_name);
        Ok(())
    }

    /// Release `seat_number` (1-based) in `class`.
    pub fn cancel_ticket(&mut self, class: FareClass, seat_number: u32) -> BookingResult<()> {
        let index = self.seat_index(seat_number)?;

        let seat = &mut self.seats.seats_mut(class)[index];
        if !seat.is_occupied() {
            return Err(BookingError::SeatNotOccupied { seat_number });
        }

        seat.vacate();
        Ok(())
    }

    pub fn seat_map(&self, class: FareClass) -> Vec<SeatMapEntry> {
        self.seats
            .seats(class)
            .iter()
            .zip(1..)
            .map(|(seat, seat_number)| SeatMapEntry {
                seat_number,
                occupant: seat.occupant().map(str::to_owned),
            })
            .collect()
    }

    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            number: self.number.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            capacity: self.capacity,
            available: Availability {
                economy: self.available_seat_count(FareClass::Economy),
                business: self.available_seat_count(FareClass::Business),
                first: self.available_seat_count(FareClass::First),
            },
        }
    }

    fn seat_index(&self, seat_number: u32) -> BookingResult<usize> {
        if seat_number < 1 || seat_number > self.capacity {
            return Err(BookingError::InvalidSeatNumber {
                seat_number,
                capacity: self.capacity,
            });
        }
        Ok((seat_number - 1) as usize)
    }
}
