use crate::{
    dtos::{
        ErrorResponse,
        room::{RoomPayload, RoomResponse},
    },
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::room::RoomService;
use sea_orm::prelude::Uuid;

/// List all rooms
#[utoipa::path(
    get,
    path = "/rooms",
    responses(
        (status = 200, description = "List of rooms", body = [RoomResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = RoomService::list_rooms(&state.db).await?;

    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

/// Create a new room
#[utoipa::path(
    post,
    path = "/rooms",
    request_body = RoomPayload,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 400, description = "Duplicate name or invalid capacity", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<RoomPayload>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let created = RoomService::create_room(&state.db, payload.name, payload.capacity).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Get a specific room by ID
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    params(
        ("id" = Uuid, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = RoomService::get_room(&state.db, id).await?;

    Ok(Json(room.into()))
}

/// Update a room's name and capacity
#[utoipa::path(
    put,
    path = "/rooms/{id}",
    params(
        ("id" = Uuid, Path, description = "Room ID")
    ),
    request_body = RoomPayload,
    responses(
        (status = 200, description = "Room updated", body = RoomResponse),
        (status = 400, description = "Duplicate name or invalid capacity", body = ErrorResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RoomPayload>,
) -> Result<Json<RoomResponse>, ApiError> {
    let updated = RoomService::update_room(&state.db, id, payload.name, payload.capacity).await?;

    Ok(Json(updated.into()))
}

/// Delete a room and all of its reservations
#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    params(
        ("id" = Uuid, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    RoomService::delete_room(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
