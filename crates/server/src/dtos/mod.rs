pub mod reservation;
pub mod room;

use serde::Serialize;
use utoipa::ToSchema;

/// Body of every JSON error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
