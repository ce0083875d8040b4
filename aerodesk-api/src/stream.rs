use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures_util::{Stream, StreamExt};
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/flights/{number}/stream", get(seat_stream))
}

/// GET /v1/flights/{number}/stream
/// Server-sent seat changes for one flight.
async fn seat_stream(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    state.inventory.flight_summary(&number).await?;

    let rx = state.inventory.events().subscribe();
    let stream = BroadcastStream::new(rx).filter_map(move |result| {
        let number = number.clone();
        async move {
            match result {
                Ok(event) if event.flight_number == number => Event::default()
                    .event("seat_changed")
                    .json_data(&event)
                    .inspect_err(|e| tracing::error!("Failed to encode seat event: {}", e))
                    .ok()
                    .map(Ok),
                Ok(_) => None,
                // lagged receivers skip what they missed
                Err(e) => {
                    tracing::warn!("Seat stream for {} lagging: {}", number, e);
                    None
                }
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
