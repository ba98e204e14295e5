use sea_orm::DatabaseConnection;

/// Shared handles passed to every handler through axum state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
