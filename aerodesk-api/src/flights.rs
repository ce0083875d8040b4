use aerodesk_core::{FareClass, Flight, FlightSummary, SeatMapEntry};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateFlightRequest {
    pub number: String,
    pub origin: String,
    pub destination: String,
    pub capacity: u32,
}

#[derive(Debug, Deserialize)]
pub struct BookTicketRequest {
    pub fare_class: FareClass,
    pub passenger_name: String,
    pub seat_number: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub flight_number: String,
    pub fare_class: FareClass,
    pub seat_number: u32,
    pub passenger_name: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeatMapResponse {
    pub flight_number: String,
    pub fare_class: FareClass,
    pub seats: Vec<SeatMapEntry>,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(list_flights).post(create_flight))
        .route("/v1/flights/{number}", get(get_flight))
        .route("/v1/flights/{number}/bookings", post(book_ticket))
        .route("/v1/flights/{number}/seats/{fare_class}", get(seat_map))
        .route(
            "/v1/flights/{number}/seats/{fare_class}/{seat_number}",
            delete(cancel_ticket),
        )
}

/// GET /v1/flights
async fn list_flights(State(state): State<AppState>) -> Json<Vec<FlightSummary>> {
    Json(state.inventory.list_flights().await)
}

/// POST /v1/flights
async fn create_flight(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlightRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FlightSummary>), AppError> {
    let Json(req) = payload?;
    if req.number.trim().is_empty() {
        return Err(AppError::ValidationError("Flight number must not be empty".to_string()));
    }
    let max_capacity = state.limits.max_capacity;
    if req.capacity > max_capacity {
        return Err(AppError::ValidationError(format!(
            "Capacity {} exceeds the maximum of {}",
            req.capacity, max_capacity
        )));
    }

    let flight = Flight::new(req.number, req.origin, req.destination, req.capacity);
    let summary = state.inventory.add_flight(flight).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /v1/flights/{number}
async fn get_flight(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<FlightSummary>, AppError> {
    let summary = state.inventory.flight_summary(&number).await?;
    Ok(Json(summary))
}

/// POST /v1/flights/{number}/bookings
async fn book_ticket(
    State(state): State<AppState>,
    Path(number): Path<String>,
    payload: Result<Json<BookTicketRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let Json(req) = payload?;
    state
        .inventory
        .book_ticket(&number, req.fare_class, &req.passenger_name, req.seat_number)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            flight_number: number,
            fare_class: req.fare_class,
            seat_number: req.seat_number,
            passenger_name: req.passenger_name.trim().to_string(),
            status: "BOOKED".to_string(),
        }),
    ))
}

/// GET /v1/flights/{number}/seats/{fare_class}
async fn seat_map(
    State(state): State<AppState>,
    path: Result<Path<(String, FareClass)>, PathRejection>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let Path((number, fare_class)) = path?;
    let seats = state.inventory.seat_map(&number, fare_class).await?;
    Ok(Json(SeatMapResponse {
        flight_number: number,
        fare_class,
        seats,
    }))
}

/// DELETE /v1/flights/{number}/seats/{fare_class}/{seat_number}
async fn cancel_ticket(
    State(state): State<AppState>,
    path: Result<Path<(String, FareClass, u32)>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path((number, fare_class, seat_number)) = path?;
    state.inventory.cancel_ticket(&number, fare_class, seat_number).await?;
    Ok(StatusCode::NO_CONTENT)
}
