use aerodesk_core::{
    FareClass, Flight, FlightSummary, Inventory, InventoryError, InventoryResult, SeatMapEntry,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use crate::events::{SeatChange, SeatChangedEvent, SeatEventBus};

struct FlightSlot {
    number: String,
    flight: Arc<RwLock<Flight>>,
}

/// Inventory for concurrent callers: one lock for the flight list and one per flight.
///
/// Book and cancel hold the flight's write lock across the occupancy check and the
/// update, so two callers can never both win the same seat. Work on different
/// flights never contends.
///
/// Flights are split out of [`Inventory`] into their own locks, so the duplicate
/// check and the lookup by number live here as well. Seat rules still run through
/// [`Flight`].
pub struct SharedInventory {
    slots: RwLock<Vec<FlightSlot>>,
    events: SeatEventBus,
}

impl SharedInventory {
    pub fn new(inventory: Inventory, events: SeatEventBus) -> Self {
        let slots = inventory
            .into_flights()
            .into_iter()
            .map(|flight| FlightSlot {
                number: flight.number().to_string(),
                flight: Arc::new(RwLock::new(flight)),
            })
            .collect();

        Self {
            slots: RwLock::new(slots),
            events,
        }
    }

    pub fn events(&self) -> &SeatEventBus {
        &self.events
    }

    pub async fn add_flight(&self, flight: Flight) -> InventoryResult<FlightSummary> {
        let mut slots = self.slots.write().await;
        if slots.iter().any(|slot| slot.number == flight.number()) {
            warn!("Rejected duplicate flight {}", flight.number());
            return Err(InventoryError::DuplicateFlightNumber(flight.number().to_string()));
        }

        let summary = flight.summary();
        slots.push(FlightSlot {
            number: summary.number.clone(),
            flight: Arc::new(RwLock::new(flight)),
        });
        info!("Flight {} added ({} -> {})", summary.number, summary.origin, summary.destination);
        Ok(summary)
    }

    pub async fn list_flights(&self) -> Vec<FlightSummary> {
        let flights: Vec<_> = self
            .slots
            .read()
            .await
            .iter()
            .map(|slot| Arc::clone(&slot.flight))
            .collect();

        let mut summaries = Vec::with_capacity(flights.len());
        for flight in flights {
            summaries.push(flight.read().await.summary());
        }
        summaries
    }

    pub async fn flight_summary(&self, number: &str) -> InventoryResult<FlightSummary> {
        let flight = self.flight(number).await?;
        let summary = flight.read().await.summary();
        Ok(summary)
    }

    pub async fn book_ticket(
        &self,
        number: &str,
        class: FareClass,
        passenger_name: &str,
        seat_number: u32,
    ) -> InventoryResult<()> {
        let flight = self.flight(number).await?;
        let mut flight = flight.write().await;
        flight
            .book_ticket(class, passenger_name, seat_number)
            .inspect_err(|e| warn!("Booking on {} {} seat {} rejected: {}", number, class, seat_number, e))?;

        info!("Seat {} booked on {} ({})", seat_number, number, class);
        // published under the write lock so events follow the order of the updates
        self.events
            .publish(SeatChangedEvent::now(number, class, seat_number, SeatChange::Booked));
        Ok(())
    }

    pub async fn cancel_ticket(
        &self,
        number: &str,
        class: FareClass,
        seat_number: u32,
    ) -> InventoryResult<()> {
        let flight = self.flight(number).await?;
        let mut flight = flight.write().await;
        flight
            .cancel_ticket(class, seat_number)
            .inspect_err(|e| warn!("Cancellation on {} {} seat {} rejected: {}", number, class, seat_number, e))?;

        info!("Seat {} cancelled on {} ({})", seat_number, number, class);
        self.events
            .publish(SeatChangedEvent::now(number, class, seat_number, SeatChange::Cancelled));
        Ok(())
    }

    pub async fn seat_map(&self, number: &str, class: FareClass) -> InventoryResult<Vec<SeatMapEntry>> {
        let flight = self.flight(number).await?;
        let map = flight.read().await.seat_map(class);
        Ok(map)
    }

    /// Resolve a flight handle, releasing the list lock before the caller locks the flight.
    async fn flight(&self, number: &str) -> InventoryResult<Arc<RwLock<Flight>>> {
        let slots = self.slots.read().await;
        let flight = slots
            .iter()
            .find(|slot| slot.number == number)
            .map(|slot| Arc::clone(&slot.flight));
        flight.ok_or_else(|| InventoryError::FlightNotFound(number.to_string()))
    }
}

impl From<Inventory> for SharedInventory {
    fn from(inventory: Inventory) -> Self {
        Self::new(inventory, SeatEventBus::default())
    }
}
