//! Site replication handlers.

use crate::error::ApiResult;
use crate::models::{
    PeerInfoEditRequest, PeerSiteEditResponse, PeerSiteRemoveRequest, PeerSiteRemoveResponse,
    PeerSiteRequest, SiteReplicationAddResponse, SiteReplicationInfoResponse,
};
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};

/// `GET /api/v1/admin/site-replication`
pub async fn get_site_replication(
    State(state): State<AppState>,
) -> ApiResult<Json<SiteReplicationInfoResponse>> {
    let config = state.site_replication.get_config().await?;
    Ok(Json(config))
}

/// `POST /api/v1/admin/site-replication`
pub async fn add_site_replication(
    State(state): State<AppState>,
    payload: Result<Json<Vec<PeerSiteRequest>>, JsonRejection>,
) -> ApiResult<Json<SiteReplicationAddResponse>> {
    let Json(sites) = payload?;
    let status = state.site_replication.add_sites(sites).await?;
    Ok(Json(status))
}

/// `PUT /api/v1/admin/site-replication`
pub async fn edit_site_replication(
    State(state): State<AppState>,
    payload: Result<Json<PeerInfoEditRequest>, JsonRejection>,
) -> ApiResult<Json<PeerSiteEditResponse>> {
    let Json(req) = payload?;
    let status = state.site_replication.edit_site(req).await?;
    Ok(Json(status))
}

/// `DELETE /api/v1/admin/site-replication`
pub async fn delete_site_replication(
    State(state): State<AppState>,
    payload: Result<Json<PeerSiteRemoveRequest>, JsonRejection>,
) -> ApiResult<Json<PeerSiteRemoveResponse>> {
    let Json(req) = payload?;
    let status = state.site_replication.remove_sites(req).await?;
    Ok(Json(status))
}
