use aerodesk_core::{BookingError, InventoryError};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("{0}")]
    ConflictError(String),
}

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        let message = err.to_string();
        match err {
            InventoryError::FlightNotFound(_) => AppError::NotFoundError(message),
            InventoryError::DuplicateFlightNumber(_) => AppError::ConflictError(message),
            InventoryError::Booking(booking) => match booking {
                BookingError::InvalidSeatNumber { .. } | BookingError::EmptyPassengerName => {
                    AppError::ValidationError(message)
                }
                BookingError::SeatOccupied { .. } | BookingError::SeatNotOccupied { .. } => {
                    AppError::ConflictError(message)
                }
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: InventoryError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_inventory_error_status_mapping() {
        assert_eq!(status_of(InventoryError::FlightNotFound("FL9".into())), StatusCode::NOT_FOUND);
        assert_eq!(status_of(InventoryError::DuplicateFlightNumber("FL1".into())), StatusCode::CONFLICT);
        assert_eq!(
            status_of(BookingError::InvalidSeatNumber { seat_number: 0, capacity: 10 }.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(BookingError::EmptyPassengerName.into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(BookingError::SeatOccupied { seat_number: 1 }.into()), StatusCode::CONFLICT);
        assert_eq!(status_of(BookingError::SeatNotOccupied { seat_number: 1 }.into()), StatusCode::CONFLICT);
    }
}
