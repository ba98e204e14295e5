use crate::dtos::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;

/// Maps service failures onto API status codes and `{"error": ...}` bodies
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(err) = self;

        match &err {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ServiceError::DuplicateName
            | ServiceError::InvalidCapacity
            | ServiceError::Rejected(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            ServiceError::Db(db_err) => {
                log::error!("storage error: {db_err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "internal server error".to_owned(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
