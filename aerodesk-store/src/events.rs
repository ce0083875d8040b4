use aerodesk_core::FareClass;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatChange {
    Booked,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatChangedEvent {
    pub flight_number: String,
    pub fare_class: FareClass,
    pub seat_number: u32,
    pub change: SeatChange,
    pub occurred_at: i64,
}

impl SeatChangedEvent {
    pub fn now(flight_number: &str, fare_class: FareClass, seat_number: u32, change: SeatChange) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            fare_class,
            seat_number,
            change,
            occurred_at: Utc::now().timestamp(),
        }
    }
}

/// In-process fan-out of seat changes.
#[derive(Clone)]
pub struct SeatEventBus {
    tx: broadcast::Sender<SeatChangedEvent>,
}

impl SeatEventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SeatChangedEvent> {
        self.tx.subscribe()
    }

    /// Fire-and-forget; having no subscribers is not an error.
    pub fn publish(&self, event: SeatChangedEvent) {
        let flight = event.flight_number.clone();
        match self.tx.send(event) {
            Ok(receivers) => debug!("Seat event for {} sent to {} subscribers", flight, receivers),
            Err(_) => debug!("Seat event for {} dropped: no subscribers", flight),
        }
    }
}

impl Default for SeatEventBus {
    fn default() -> Self {
        Self::new(100)
    }
}
