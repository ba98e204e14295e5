use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Rooms", description = "Room directory endpoints"),
        (name = "Reservations", description = "Room booking endpoints"),
    ),
    info(
        title = "Meeting Rooms API",
        version = "1.0.0",
        description = "Meeting room directory and reservation API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
