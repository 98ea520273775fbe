use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use delite_web::handlers;
use delite_web::models::BookingData;
use delite_web::services::api::http::{HttpBookingApi, IDEMPOTENCY_HEADER};
use delite_web::services::api::{ApiError, BookingApi};
use delite_web::state::AppState;

// ── Fake backend ──

#[derive(Default)]
struct Seen {
    searches: Mutex<Vec<Option<String>>>,
    idempotency_keys: Mutex<Vec<String>>,
    promo_bodies: Mutex<Vec<Value>>,
}

fn experience_json(id: &str) -> Value {
    json!({
        "_id": id,
        "name": "Kayaking",
        "location": "Udupi",
        "image": "https://images.example.com/kayak.jpg",
        "description": "Curated small-group kayaking.",
        "price": 999,
        "slots": [
            {"_id": "s1", "experienceId": id, "date": "2025-10-22T00:00:00.000Z", "time": "07:00 am",
             "capacity": 10, "booked": 2, "available": 8, "status": "available"}
        ]
    })
}

fn booking_json(reference: &str) -> Value {
    json!({
        "_id": "b1",
        "bookingReference": reference,
        "fullName": "Asha Rao",
        "email": "asha@example.com",
        "experienceId": "e1",
        "slotId": "s1",
        "quantity": 2,
        "agreedToTerms": true,
        "date": "2025-10-22T00:00:00.000Z",
        "time": "07:00 am",
        "subtotal": 1998,
        "taxes": 99.9,
        "total": 2097.9,
        "status": "confirmed",
        "paymentStatus": "paid"
    })
}

async fn list(State(seen): State<Arc<Seen>>, Query(q): Query<std::collections::HashMap<String, String>>) -> Json<Value> {
    seen.searches.lock().unwrap().push(q.get("search").cloned());
    Json(json!([experience_json("e1")]))
}

async fn detail(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "e1" | "a b" => Json(experience_json(&id)).into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(experience_json(&id)).into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({"message": "Experience not found"}))).into_response(),
    }
}

async fn validate_promo(State(seen): State<Arc<Seen>>, Json(body): Json<Value>) -> Response {
    seen.promo_bodies.lock().unwrap().push(body.clone());
    if body["code"] == "SAVE10" {
        Json(json!({
            "isValid": true,
            "message": "Promo code applied successfully",
            "subtotal": 1998,
            "discountAmount": 199.8,
            "total": 1798.2
        }))
        .into_response()
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({"success": false, "message": "Invalid promo code"}))).into_response()
    }
}

async fn create_booking(State(seen): State<Arc<Seen>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Some(key) = headers.get(IDEMPOTENCY_HEADER).and_then(|v| v.to_str().ok()) {
        seen.idempotency_keys.lock().unwrap().push(key.to_string());
    }
    match body["slotId"].as_str() {
        Some("full") => (StatusCode::CONFLICT, Json(json!({"message": "Slot is fully booked"}))).into_response(),
        Some("boom") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => (StatusCode::CREATED, Json(booking_json("HD-1234"))).into_response(),
    }
}

async fn booking_by_reference(Path(reference): Path<String>) -> Response {
    if reference == "HD-1234" {
        Json(booking_json(&reference)).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn spawn_backend() -> (String, Arc<Seen>) {
    let seen = Arc::new(Seen::default());
    let app = Router::new()
        .route("/experiences", get(list))
        .route("/experiences/:id", get(detail))
        .route("/promos/validate", post(validate_promo))
        .route("/bookings", post(create_booking))
        .route("/bookings/:reference", get(booking_by_reference))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/"), seen)
}

fn client(base_url: &str) -> HttpBookingApi {
    HttpBookingApi::new(base_url, Duration::from_millis(500)).unwrap()
}

fn booking_data(slot_id: &str) -> BookingData {
    BookingData {
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: None,
        experience_id: "e1".to_string(),
        slot_id: slot_id.to_string(),
        quantity: 2,
        promo_code: None,
        agreed_to_terms: true,
    }
}

// ── Catalog ──

#[tokio::test]
async fn test_list_forwards_search_only_when_present() {
    let (base, seen) = spawn_backend().await;
    let api = client(&base);

    let all = api.list_experiences(None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "e1");
    assert_eq!(all[0].price, 999);

    api.list_experiences(Some("goa trip")).await.unwrap();

    let searches = seen.searches.lock().unwrap().clone();
    assert_eq!(searches, vec![None, Some("goa trip".to_string())]);
}

#[tokio::test]
async fn test_get_experience_with_slots() {
    let (base, _) = spawn_backend().await;
    let exp = client(&base).get_experience("e1").await.unwrap();

    assert_eq!(exp.name, "Kayaking");
    assert_eq!(exp.about, "");
    assert!(exp.is_active);
    assert_eq!(exp.slots().len(), 1);
    assert_eq!(exp.slots()[0].available, 8);
}

#[tokio::test]
async fn test_get_experience_encodes_id() {
    let (base, _) = spawn_backend().await;
    let exp = client(&base).get_experience("a b").await.unwrap();
    assert_eq!(exp.id, "a b");
}

#[tokio::test]
async fn test_get_experience_not_found_uses_fixed_message() {
    let (base, _) = spawn_backend().await;
    let err = client(&base).get_experience("missing").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Failed to fetch experience");
}

#[tokio::test]
async fn test_timeout_is_a_transport_error() {
    let (base, _) = spawn_backend().await;
    let err = client(&base).get_experience("slow").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.to_string(), "Failed to fetch experience");
}

#[tokio::test]
async fn test_unreachable_backend() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .list_experiences(None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.to_string(), "Failed to fetch experiences");
}

#[tokio::test]
async fn test_unreachable_backend_page_hides_backend_url() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = Arc::new(AppState {
        api: Arc::new(client(&format!("http://{addr}"))),
    });
    let res = handlers::router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Error: Failed to fetch experiences"));
    assert!(!body.contains(&addr.to_string()));
    assert!(!body.contains("error sending request"));
}

// ── Promo ──

#[tokio::test]
async fn test_validate_promo_sends_camel_case_body() {
    let (base, seen) = spawn_backend().await;
    let res = client(&base).validate_promo("SAVE10", "e1", 2).await.unwrap();

    assert!(res.is_valid);
    assert_eq!(res.discount_amount, Some(199.8));

    let bodies = seen.promo_bodies.lock().unwrap().clone();
    assert_eq!(bodies, vec![json!({"code": "SAVE10", "experienceId": "e1", "quantity": 2})]);
}

#[tokio::test]
async fn test_validate_promo_surfaces_backend_message() {
    let (base, _) = spawn_backend().await;
    let err = client(&base).validate_promo("NOPE", "e1", 2).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Invalid promo code");
}

// ── Bookings ──

#[tokio::test]
async fn test_create_booking_sends_idempotency_key() {
    let (base, seen) = spawn_backend().await;
    let api = client(&base);

    let booking = api.create_booking(&booking_data("s1"), "key-1").await.unwrap();
    assert_eq!(booking.booking_reference, "HD-1234");

    // a retry of the same attempt carries the same key
    api.create_booking(&booking_data("s1"), "key-1").await.unwrap();

    let keys = seen.idempotency_keys.lock().unwrap().clone();
    assert_eq!(keys, vec!["key-1", "key-1"]);
}

#[tokio::test]
async fn test_create_booking_rejection_message() {
    let (base, _) = spawn_backend().await;
    let err = client(&base)
        .create_booking(&booking_data("full"), "key-2")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "Slot is fully booked");
}

#[tokio::test]
async fn test_create_booking_fallback_without_body() {
    let (base, _) = spawn_backend().await;
    let err = client(&base)
        .create_booking(&booking_data("boom"), "key-3")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Failed to create booking");
}

#[tokio::test]
async fn test_booking_by_reference() {
    let (base, _) = spawn_backend().await;
    let api = client(&base);

    let booking = api.get_booking_by_reference("HD-1234").await.unwrap();
    assert_eq!(booking.quantity, 2);
    assert_eq!(booking.total, 2097.9);

    let err = api.get_booking_by_reference("HD-0000").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch booking");
}
