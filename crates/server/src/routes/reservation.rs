use crate::{
    dtos::{
        ErrorResponse,
        reservation::{ReservationPayload, ReservationResponse},
    },
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Local;
use database::services::reservation::ReservationService;
use models::time_slot::TimeSlot;
use sea_orm::prelude::Uuid;

/// List a room's upcoming reservations, ordered by start time
#[utoipa::path(
    get,
    path = "/rooms/{id}/reservations",
    params(
        ("id" = Uuid, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Upcoming reservations for the room", body = [ReservationResponse]),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let now = Local::now().naive_local();
    let upcoming = ReservationService::list_future_for_room(&state.db, room_id, now).await?;

    Ok(Json(
        upcoming.into_iter().map(ReservationResponse::from).collect(),
    ))
}

/// Book a room for a time slot
#[utoipa::path(
    post,
    path = "/rooms/{id}/reservations",
    params(
        ("id" = Uuid, Path, description = "Room ID")
    ),
    request_body = ReservationPayload,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "The slot violates a booking rule", body = ErrorResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Json(payload): Json<ReservationPayload>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let slot = TimeSlot::new(payload.start_time, payload.end_time);
    let created =
        ReservationService::create_reservation(&state.db, room_id, payload.organizer_name, slot)
            .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Cancel a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ReservationService::delete_reservation(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
