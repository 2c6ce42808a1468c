use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::organization::{
        DeletedResponse, OrganizationExport, OrganizationFilter, OrganizationRequest,
        OrganizationStats,
    },
    models::Organization,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{Json, Path, Query};

use super::services;

#[utoipa::path(
    get,
    path = "/api/organizations",
    params(OrganizationFilter),
    responses(
        (status = 200, description = "Organizations ordered by name", body = Vec<Organization>),
        (status = 400, description = "Invalid limit or offset")
    ),
    tag = "organizations"
)]
pub async fn list_organizations(
    State(db): State<Database>,
    Query(filter): Query<OrganizationFilter>,
) -> Result<Json<Vec<Organization>>, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let organizations = services::list_organizations(db.pool(), &filter).await?;

    Ok(Json(organizations))
}

#[utoipa::path(
    get,
    path = "/api/organizations/{organization_id}",
    params(
        ("organization_id" = Uuid, Path, description = "Organization id")
    ),
    responses(
        (status = 200, description = "Organization found", body = Organization),
        (status = 404, description = "Organization not found")
    ),
    tag = "organizations"
)]
pub async fn get_organization(
    State(db): State<Database>,
    Path(organization_id): Path<Uuid>,
) -> Result<Json<Organization>, WebError> {
    let organization = services::get_organization(db.pool(), organization_id).await?;

    Ok(Json(organization))
}

#[utoipa::path(
    post,
    path = "/api/organizations",
    request_body = OrganizationRequest,
    responses(
        (status = 201, description = "Organization created", body = Organization),
        (status = 400, description = "Validation error")
    ),
    tag = "organizations"
)]
pub async fn create_organization(
    State(db): State<Database>,
    Json(req): Json<OrganizationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let organization = services::create_organization(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(organization)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/organizations/{organization_id}",
    params(
        ("organization_id" = Uuid, Path, description = "Organization id")
    ),
    request_body = OrganizationRequest,
    responses(
        (status = 200, description = "Organization replaced", body = Organization),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Organization not found")
    ),
    tag = "organizations"
)]
pub async fn update_organization(
    State(db): State<Database>,
    Path(organization_id): Path<Uuid>,
    Json(req): Json<OrganizationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let organization = services::update_organization(db.pool(), organization_id, &req).await?;

    Ok(Json(organization).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/organizations/{organization_id}",
    params(
        ("organization_id" = Uuid, Path, description = "Organization id")
    ),
    responses(
        (status = 200, description = "Organization deleted", body = DeletedResponse),
        (status = 404, description = "Organization not found")
    ),
    tag = "organizations"
)]
pub async fn delete_organization(
    State(db): State<Database>,
    Path(organization_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, WebError> {
    services::delete_organization(db.pool(), organization_id).await?;

    Ok(Json(DeletedResponse {
        message: "Organization deleted".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Organization counts overall, by state and by type", body = OrganizationStats)
    ),
    tag = "organizations"
)]
pub async fn get_organization_stats(
    State(db): State<Database>,
) -> Result<Json<OrganizationStats>, WebError> {
    let stats = services::get_organization_stats(db.pool()).await?;

    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/export",
    responses(
        (status = 200, description = "Every organization ordered by state and name", body = OrganizationExport)
    ),
    tag = "organizations"
)]
pub async fn export_organizations(
    State(db): State<Database>,
) -> Result<Json<OrganizationExport>, WebError> {
    let export = services::export_organizations(db.pool()).await?;

    Ok(Json(export))
}
