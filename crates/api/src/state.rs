/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool; the only path to the `plants` table.
    pub pool: leaflink_db::DbPool,
}
