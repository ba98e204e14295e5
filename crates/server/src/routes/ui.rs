use crate::state::AppState;
use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use database::{
    entities::{reservation, room},
    error::ServiceError,
    services::{reservation::ReservationService, room::RoomService},
};
use models::time_slot::{TimeSlot, parse_wall_clock};
use sea_orm::prelude::Uuid;
use serde::Deserialize;

/// Server-rendered pages; the JSON API lives under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(room_list_page))
        .route("/rooms/new", get(new_room_page).post(create_room))
        .route("/rooms/{id}", get(room_detail_page).post(book_room))
        .route(
            "/reservations/{id}/delete",
            post(delete_reservation).get(back_to_room),
        )
}

#[derive(Template)]
#[template(path = "room_list.html")]
struct RoomListTemplate {
    rooms: Vec<room::Model>,
}

#[derive(Template)]
#[template(path = "create_room.html")]
struct CreateRoomTemplate {
    error: Option<String>,
    name: String,
    capacity: String,
}

#[derive(Template)]
#[template(path = "room_detail.html")]
struct RoomDetailTemplate {
    room: room::Model,
    reservations: Vec<ReservationView>,
    error: Option<String>,
    organizer_name: String,
    start_time: String,
    end_time: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    message: String,
}

/// Row of the reservations table, pre-formatted for display
struct ReservationView {
    id: String,
    organizer_name: String,
    start_time: String,
    end_time: String,
}

impl From<reservation::Model> for ReservationView {
    fn from(model: reservation::Model) -> Self {
        Self {
            id: model.id.to_string(),
            organizer_name: model.organizer_name,
            start_time: model.start_time.format("%Y-%m-%d %H:%M").to_string(),
            end_time: model.end_time.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RoomForm {
    name: String,
    capacity: i32,
}

#[derive(Deserialize)]
struct ReservationForm {
    organizer_name: String,
    start_time: String,
    end_time: String,
}

async fn room_list_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let rooms = RoomService::list_rooms(&state.db)
        .await
        .map_err(internal_error)?;

    render(RoomListTemplate { rooms })
}

async fn new_room_page() -> Result<Response, StatusCode> {
    render(CreateRoomTemplate {
        error: None,
        name: String::new(),
        capacity: String::new(),
    })
}

async fn create_room(
    State(state): State<AppState>,
    Form(form): Form<RoomForm>,
) -> Result<Response, StatusCode> {
    match RoomService::create_room(&state.db, form.name.clone(), form.capacity).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        // Re-render the form with the reason and the submitted values
        Err(err @ (ServiceError::DuplicateName | ServiceError::InvalidCapacity)) => {
            render(CreateRoomTemplate {
                error: Some(err.to_string()),
                name: form.name,
                capacity: form.capacity.to_string(),
            })
        }
        Err(err) => Err(internal_error(err)),
    }
}

async fn room_detail_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, StatusCode> {
    let room = match RoomService::get_room(&state.db, id).await {
        Ok(room) => room,
        Err(ServiceError::NotFound(_)) => return not_found("the requested room does not exist"),
        Err(err) => return Err(internal_error(err)),
    };

    let reservations = upcoming_views(&state, id).await?;

    render(RoomDetailTemplate {
        room,
        reservations,
        error: None,
        organizer_name: String::new(),
        start_time: String::new(),
        end_time: String::new(),
    })
}

async fn book_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ReservationForm>,
) -> Result<Response, StatusCode> {
    let room = match RoomService::get_room(&state.db, id).await {
        Ok(room) => room,
        Err(ServiceError::NotFound(_)) => return not_found("the requested room does not exist"),
        Err(err) => return Err(internal_error(err)),
    };

    let slot = match parse_form_slot(&form) {
        Ok(slot) => slot,
        Err(message) => return rerender_detail(&state, room, &form, message).await,
    };

    match ReservationService::create_reservation(&state.db, id, form.organizer_name.clone(), slot)
        .await
    {
        Ok(_) => Ok(Redirect::to(&format!("/rooms/{id}")).into_response()),
        Err(ServiceError::Rejected(rejection)) => {
            rerender_detail(&state, room, &form, rejection.to_string()).await
        }
        Err(ServiceError::NotFound(_)) => not_found("the requested room does not exist"),
        Err(err) => Err(internal_error(err)),
    }
}

async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, StatusCode> {
    // Look the reservation up first to know which room page to return to
    let reservation = match ReservationService::get_reservation(&state.db, id).await {
        Ok(reservation) => reservation,
        Err(ServiceError::NotFound(_)) => {
            return not_found("the requested reservation does not exist");
        }
        Err(err) => return Err(internal_error(err)),
    };

    ReservationService::delete_reservation(&state.db, id)
        .await
        .map_err(internal_error)?;

    Ok(Redirect::to(&format!("/rooms/{}", reservation.room_id)).into_response())
}

/// GET on the delete URL never mutates; it just returns to the room page
async fn back_to_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, StatusCode> {
    match ReservationService::get_reservation(&state.db, id).await {
        Ok(reservation) => {
            Ok(Redirect::to(&format!("/rooms/{}", reservation.room_id)).into_response())
        }
        Err(ServiceError::NotFound(_)) => not_found("the requested reservation does not exist"),
        Err(err) => Err(internal_error(err)),
    }
}

async fn upcoming_views(
    state: &AppState,
    room_id: Uuid,
) -> Result<Vec<ReservationView>, StatusCode> {
    let now = Local::now().naive_local();

    ReservationService::list_future_for_room(&state.db, room_id, now)
        .await
        .map(|rows| rows.into_iter().map(ReservationView::from).collect())
        .map_err(internal_error)
}

async fn rerender_detail(
    state: &AppState,
    room: room::Model,
    form: &ReservationForm,
    message: String,
) -> Result<Response, StatusCode> {
    let reservations = upcoming_views(state, room.id).await?;

    render(RoomDetailTemplate {
        room,
        reservations,
        error: Some(message),
        organizer_name: form.organizer_name.clone(),
        start_time: form.start_time.clone(),
        end_time: form.end_time.clone(),
    })
}

fn parse_form_slot(form: &ReservationForm) -> Result<TimeSlot, String> {
    let start = parse_wall_clock(&form.start_time)
        .map_err(|_| "enter the start time as YYYY-MM-DDTHH:MM".to_owned())?;
    let end = parse_wall_clock(&form.end_time)
        .map_err(|_| "enter the end time as YYYY-MM-DDTHH:MM".to_owned())?;

    Ok(TimeSlot::new(start, end))
}

fn render<T: Template>(template: T) -> Result<Response, StatusCode> {
    template
        .render()
        .map(|html| Html(html).into_response())
        .map_err(template_error)
}

fn not_found(message: &str) -> Result<Response, StatusCode> {
    NotFoundTemplate {
        message: message.to_owned(),
    }
    .render()
    .map(|html| (StatusCode::NOT_FOUND, Html(html)).into_response())
    .map_err(template_error)
}

fn template_error(err: askama::Error) -> StatusCode {
    log::error!("template error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

fn internal_error(err: ServiceError) -> StatusCode {
    log::error!("storage error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
mod tests {
    use crate::routes::ui::{
        CreateRoomTemplate, ReservationView, RoomDetailTemplate, RoomListTemplate,
    };
    use askama::Template;
    use database::entities::room;
    use sea_orm::prelude::Uuid;

    fn sample_room() -> room::Model {
        room::Model {
            id: Uuid::nil(),
            name: "Sala Norte".to_owned(),
            capacity: 8,
        }
    }

    #[test]
    fn test_room_list_renders_rooms() {
        let html = RoomListTemplate {
            rooms: vec![sample_room()],
        }
        .render()
        .unwrap();

        assert!(html.contains("Sala Norte"));
        assert!(html.contains("capacity: 8"));
    }

    #[test]
    fn test_room_list_renders_empty_state() {
        let html = RoomListTemplate { rooms: vec![] }.render().unwrap();
        assert!(html.contains("No rooms have been registered yet."));
    }

    #[test]
    fn test_create_room_form_shows_error() {
        let html = CreateRoomTemplate {
            error: Some("a room with this name already exists".to_owned()),
            name: "Sala Norte".to_owned(),
            capacity: "8".to_owned(),
        }
        .render()
        .unwrap();

        assert!(html.contains("a room with this name already exists"));
        assert!(html.contains(r#"value="Sala Norte""#));
    }

    #[test]
    fn test_room_detail_shows_occupied_message_verbatim() {
        let html = RoomDetailTemplate {
            room: sample_room(),
            reservations: vec![ReservationView {
                id: Uuid::nil().to_string(),
                organizer_name: "Juan Perez".to_owned(),
                start_time: "2025-08-17 15:00".to_owned(),
                end_time: "2025-08-17 16:00".to_owned(),
            }],
            error: Some("the room is already occupied in this time range".to_owned()),
            organizer_name: "Ana Lopez".to_owned(),
            start_time: "2025-08-17T15:30".to_owned(),
            end_time: "2025-08-17T16:30".to_owned(),
        }
        .render()
        .unwrap();

        assert!(html.contains("the room is already occupied in this time range"));
        assert!(html.contains("Juan Perez"));
        assert!(html.contains(r#"value="2025-08-17T15:30""#));
    }
}
