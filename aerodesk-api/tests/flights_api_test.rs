use aerodesk_api::{app, AppState};
use aerodesk_core::{FareClass, Flight, Inventory};
use aerodesk_store::{LimitsConfig, SharedInventory};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use futures_util::StreamExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_state() -> AppState {
    let inventory = Inventory::with_flights([
        Flight::new("FL001", "Visakhapatnam", "Silchar", 100),
        Flight::new("FL003", "Silchar", "Kolkata", 50),
    ])
    .unwrap();
    AppState::new(SharedInventory::from(inventory))
}

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app(state.clone()).oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = send(&test_state(), "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_and_create_flights() {
    let state = test_state();

    let response = send(&state, "GET", "/v1/flights", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let flights = json_body(response).await;
    assert_eq!(flights.as_array().unwrap().len(), 2);
    assert_eq!(flights[1]["number"], "FL003");
    assert_eq!(flights[1]["available"]["economy"], 50);

    let new_flight = json!({
        "number": "FL004", "origin": "Mumbai", "destination": "Chennai", "capacity": 150
    });
    let response = send(&state, "POST", "/v1/flights", Some(new_flight.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["available"]["first"], 150);

    let response = send(&state, "POST", "/v1/flights", Some(new_flight)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let blank = json!({ "number": " ", "origin": "A", "destination": "B", "capacity": 1 });
    let response = send(&state, "POST", "/v1/flights", Some(blank)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&state, "GET", "/v1/flights/FL004", None).await;
    assert_eq!(json_body(response).await["destination"], "Chennai");
}

#[tokio::test]
async fn test_create_flight_capacity_limit() {
    let state = test_state().with_limits(LimitsConfig { max_capacity: 200 });

    let huge = json!({
        "number": "FL900", "origin": "Mumbai", "destination": "Chennai", "capacity": 4000000000u32
    });
    let response = send(&state, "POST", "/v1/flights", Some(huge)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Capacity 4000000000 exceeds the maximum of 200"
    );

    let at_limit = json!({
        "number": "FL900", "origin": "Mumbai", "destination": "Chennai", "capacity": 200
    });
    let response = send(&state, "POST", "/v1/flights", Some(at_limit)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(state.inventory.list_flights().await.len(), 3);
}

#[tokio::test]
async fn test_booking_lifecycle() {
    let state = test_state();
    let booking = json!({ "fare_class": "ECONOMY", "passenger_name": "Alice", "seat_number": 1 });

    let response = send(&state, "POST", "/v1/flights/FL001/bookings", Some(booking)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["status"], "BOOKED");

    let response = send(&state, "GET", "/v1/flights/FL001/seats/ECONOMY", None).await;
    let map = json_body(response).await;
    assert_eq!(map["seats"].as_array().unwrap().len(), 100);
    assert_eq!(map["seats"][0], json!({ "seat_number": 1, "occupant": "Alice" }));
    assert_eq!(map["seats"][1]["occupant"], Value::Null);

    let again = json!({ "fare_class": "ECONOMY", "passenger_name": "Bob", "seat_number": 1 });
    let response = send(&state, "POST", "/v1/flights/FL001/bookings", Some(again)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(response).await["error"], "Seat 1 is already occupied");

    let response = send(&state, "DELETE", "/v1/flights/FL001/seats/ECONOMY/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&state, "DELETE", "/v1/flights/FL001/seats/ECONOMY/1", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_rejections() {
    let state = test_state();

    let out_of_range = json!({ "fare_class": "FIRST", "passenger_name": "Alice", "seat_number": 51 });
    let response = send(&state, "POST", "/v1/flights/FL003/bookings", Some(out_of_range)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let unknown = json!({ "fare_class": "FIRST", "passenger_name": "Alice", "seat_number": 1 });
    let response = send(&state, "POST", "/v1/flights/FL404/bookings", Some(unknown)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Flight FL404 not found");

    // extractor rejections share the JSON error body
    let response = send(&state, "GET", "/v1/flights/FL001/seats/PREMIUM", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("PREMIUM"), "unexpected error: {}", error);

    let negative = json!({ "fare_class": "FIRST", "passenger_name": "Alice", "seat_number": -1 });
    let response = send(&state, "POST", "/v1/flights/FL003/bookings", Some(negative)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());

    let response = send(&state, "DELETE", "/v1/flights/FL001/seats/BUSINESS/-1", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());

    let response = send(&state, "DELETE", "/v1/flights/FL001/seats/BUSINESS/0", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Invalid seat number 0: must be between 1 and 100"
    );

    let summary = state.inventory.flight_summary("FL003").await.unwrap();
    assert_eq!(summary.available.first, 50);
}

#[tokio::test]
async fn test_seat_stream_emits_changes_for_flight() {
    let state = test_state();

    let response = send(&state, "GET", "/v1/flights/FL404/stream", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&state, "GET", "/v1/flights/FL003/stream", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let mut body = response.into_body().into_data_stream();

    // other flights are filtered out
    state.inventory.book_ticket("FL001", FareClass::Economy, "Alice", 1).await.unwrap();
    state.inventory.book_ticket("FL003", FareClass::Business, "Bob", 4).await.unwrap();

    let chunk = body.next().await.unwrap().unwrap();
    let text = String::from_utf8(chunk.to_vec()).unwrap();
    assert!(text.contains("event: seat_changed"));
    assert!(text.contains("\"flight_number\":\"FL003\""));
    assert!(text.contains("\"change\":\"BOOKED\""));
}
