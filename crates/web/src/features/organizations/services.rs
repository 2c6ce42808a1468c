use sqlx::PgPool;
use storage::{
    dto::organization::{
        OrganizationExport, OrganizationFilter, OrganizationRequest, OrganizationStats,
    },
    error::Result,
    models::Organization,
    repository::organization::OrganizationRepository,
};
use uuid::Uuid;

pub async fn list_organizations(
    pool: &PgPool,
    filter: &OrganizationFilter,
) -> Result<Vec<Organization>> {
    let repo = OrganizationRepository::new(pool);
    repo.list(filter).await
}

pub async fn get_organization(pool: &PgPool, organization_id: Uuid) -> Result<Organization> {
    let repo = OrganizationRepository::new(pool);
    repo.find_by_id(organization_id).await
}

pub async fn create_organization(
    pool: &PgPool,
    request: &OrganizationRequest,
) -> Result<Organization> {
    let repo = OrganizationRepository::new(pool);
    let organization = repo.create(request).await?;
    tracing::info!(organization_id = %organization.organization_id, name = %organization.name, "organization created");
    Ok(organization)
}

pub async fn update_organization(
    pool: &PgPool,
    organization_id: Uuid,
    request: &OrganizationRequest,
) -> Result<Organization> {
    let repo = OrganizationRepository::new(pool);
    repo.update(organization_id, request).await
}

pub async fn delete_organization(pool: &PgPool, organization_id: Uuid) -> Result<()> {
    let repo = OrganizationRepository::new(pool);
    repo.delete(organization_id).await?;
    tracing::info!(%organization_id, "organization deleted");
    Ok(())
}

pub async fn get_organization_stats(pool: &PgPool) -> Result<OrganizationStats> {
    let repo = OrganizationRepository::new(pool);
    repo.stats().await
}

pub async fn export_organizations(pool: &PgPool) -> Result<OrganizationExport> {
    let repo = OrganizationRepository::new(pool);
    let export = OrganizationExport::new(repo.export().await?);
    tracing::info!(total = export.total, "organizations exported");
    Ok(export)
}
