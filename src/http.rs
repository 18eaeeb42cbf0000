use crate::appointment_command::CreateAppointmentCommand;
use crate::directory::StylistDirectory;
use crate::error::BookingError;
use crate::ledger::BookingLedger;
use crate::types::{AppointmentRequest, AppointmentResponse, Slot, Stylist};
use axum::body::{Body, Bytes};
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::{http::StatusCode, Json};
use axum::{
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, warn};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Clone)]
pub struct AppState<L> {
    command: CreateAppointmentCommand<L>,
    directory: Arc<dyn StylistDirectory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_time_range"))]
struct BookingRequest {
    stylist_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    client_id: Uuid,
}

impl BookingRequest {
    fn slot(&self) -> Slot {
        Slot::new(self.start, self.end, self.stylist_id)
    }
}

impl From<BookingRequest> for AppointmentRequest {
    fn from(booking: BookingRequest) -> Self {
        AppointmentRequest::new(booking.slot(), booking.client_id)
    }
}

fn validate_time_range(booking: &BookingRequest) -> Result<(), ValidationError> {
    if booking.slot().is_well_formed() {
        return Ok(());
    }
    Err(time_range_error())
}

fn validate_query_range(query: &SlotQuery) -> Result<(), ValidationError> {
    if query.start < query.end {
        return Ok(());
    }
    Err(time_range_error())
}

fn time_range_error() -> ValidationError {
    let mut err = ValidationError::new("time_range");
    err.message = Some("slot must end after it starts".into());
    err
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_query_range"))]
struct SlotQuery {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Availability {
    booked: bool,
}

#[derive(Debug, Error)]
enum ApiError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
    #[error("Invalid slot: {0}")]
    InvalidSlot(#[from] ValidationErrors),
    #[error("Stylist {0} does not exist")]
    UnknownStylist(Uuid),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Booking(BookingError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidSlot(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnknownStylist(_) => StatusCode::NOT_FOUND,
        };
        warn!(%status, err = %self, "Request rejected");
        (status, self.to_string()).into_response()
    }
}

pub fn create_app<L: BookingLedger>(ledger: L, directory: Arc<dyn StylistDirectory>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        command: CreateAppointmentCommand::new(ledger),
        directory,
    };

    Router::new()
        .route("/appointments", post(book_appointment))
        .route("/stylists", get(get_stylists))
        .route("/stylists/:id", get(get_stylist))
        .route("/stylists/:id/bookings", get(get_bookings))
        .route("/stylists/:id/availability", get(get_availability))
        .with_state(state)
        .layer(cors)
}

/// An empty body is an absent request and is left to the command to reject.
/// Any other body must be valid JSON for a booking.
async fn book_appointment<L: BookingLedger>(
    State(state): State<AppState<L>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<AppointmentResponse>), ApiError> {
    let request = if body.is_empty() {
        None
    } else {
        let booking = parse_booking(headers, body).await?;
        booking.validate()?;
        known_stylist(&state, booking.stylist_id)?;
        Some(AppointmentRequest::from(booking))
    };

    let response = state.command.execute(request)?;
    let status = if response.success() {
        StatusCode::CREATED
    } else {
        StatusCode::CONFLICT
    };
    Ok((status, Json(response)))
}

async fn get_stylists<L: BookingLedger>(State(state): State<AppState<L>>) -> Json<Vec<Stylist>> {
    Json(state.directory.stylists())
}

async fn get_stylist<L: BookingLedger>(
    State(state): State<AppState<L>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Stylist>, ApiError> {
    known_stylist(&state, id).map(Json)
}

async fn get_bookings<L: BookingLedger>(
    State(state): State<AppState<L>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Slot>>, ApiError> {
    known_stylist(&state, id)?;
    Ok(Json(state.command.ledger().booked_slots(id)))
}

async fn get_availability<L: BookingLedger>(
    State(state): State<AppState<L>>,
    Path(id): Path<Uuid>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Availability>, ApiError> {
    query.validate()?;
    known_stylist(&state, id)?;
    let slot = Slot::new(query.start, query.end, id);
    let booked = state.command.ledger().is_booked(id, &slot);
    debug!(stylist_id = %id, booked, "Availability checked");
    Ok(Json(Availability { booked }))
}

async fn parse_booking(headers: HeaderMap, body: Bytes) -> Result<BookingRequest, JsonRejection> {
    let mut request = Request::new(Body::from(body));
    *request.headers_mut() = headers;
    let Json(booking) = Json::<BookingRequest>::from_request(request, &()).await?;
    Ok(booking)
}

fn known_stylist<L>(state: &AppState<L>, id: Uuid) -> Result<Stylist, ApiError> {
    state
        .directory
        .stylist(id)
        .ok_or(ApiError::UnknownStylist(id))
}
