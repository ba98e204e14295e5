mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use crate::{
    doc::ApiDoc,
    routes::{health, reservation, room, ui},
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use database::db::create_connection;
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = create_connection()
        .await
        .expect("Failed to connect to the database");
    let state = AppState { db };

    let api = OpenApiRouter::new()
        .routes(routes!(health::health))
        .routes(routes!(room::list_rooms, room::create_room))
        .routes(routes!(room::get_room, room::update_room, room::delete_room))
        .routes(routes!(
            reservation::list_reservations,
            reservation::create_reservation
        ))
        .routes(routes!(reservation::delete_reservation));

    let (api_router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", api)
        .split_for_parts();

    let app = api_router
        .merge(ui::router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
