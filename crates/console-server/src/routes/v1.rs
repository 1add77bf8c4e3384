//! Version 1 API routes.

use crate::{handlers::site_replication, state::AppState};
use axum::{routing::get, Router};

/// Routes nested under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/admin/site-replication",
        get(site_replication::get_site_replication)
            .post(site_replication::add_site_replication)
            .put(site_replication::edit_site_replication)
            .delete(site_replication::delete_site_replication),
    )
}
