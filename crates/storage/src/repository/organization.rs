use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::organization::{
    OrganizationFilter, OrganizationRequest, OrganizationStats, OrganizationTypeCount,
    RegionCount,
};
use crate::error::{Result, StorageError};
use crate::models::Organization;

const ORGANIZATION_COLUMNS: &str = r#"
    organization_id, name, org_type, focus_area, state_region, website, contact,
    membership, description, notes, created_at, updated_at
"#;

#[derive(FromRow)]
struct GroupCountRow {
    label: Option<String>,
    count: i64,
}

pub struct OrganizationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrganizationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Filtered window of organizations ordered by name
    pub async fn list(&self, filter: &OrganizationFilter) -> Result<Vec<Organization>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(ORGANIZATION_COLUMNS);
        query.push(" FROM organizations WHERE 1=1");

        if let Some(ref state) = filter.state {
            query.push(" AND state_region ILIKE ");
            query.push_bind(format!("%{state}%"));
        }

        if let Some(ref org_type) = filter.org_type {
            query.push(" AND org_type ILIKE ");
            query.push_bind(format!("%{org_type}%"));
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{search}%");
            query.push(" AND (name ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR description ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        query.push(" ORDER BY name, organization_id LIMIT ");
        query.push_bind(filter.limit());
        query.push(" OFFSET ");
        query.push_bind(filter.offset());

        let organizations = query
            .build_query_as::<Organization>()
            .fetch_all(self.pool)
            .await?;

        Ok(organizations)
    }

    pub async fn find_by_id(&self, organization_id: Uuid) -> Result<Organization> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(ORGANIZATION_COLUMNS);
        query.push(" FROM organizations WHERE organization_id = ");
        query.push_bind(organization_id);

        let organization = query
            .build_query_as::<Organization>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(organization)
    }

    pub async fn create(&self, req: &OrganizationRequest) -> Result<Organization> {
        let mut query = QueryBuilder::<Postgres>::new(
            r#"
            INSERT INTO organizations (
                name, org_type, focus_area, state_region, website, contact,
                membership, description, notes
            )
            "#,
        );
        query.push_values(std::iter::once(req), |mut row, req| {
            row.push_bind(&req.name)
                .push_bind(&req.org_type)
                .push_bind(&req.focus_area)
                .push_bind(&req.state_region)
                .push_bind(&req.website)
                .push_bind(&req.contact)
                .push_bind(&req.membership)
                .push_bind(&req.description)
                .push_bind(&req.notes);
        });
        query.push(" RETURNING ");
        query.push(ORGANIZATION_COLUMNS);

        let organization = query
            .build_query_as::<Organization>()
            .fetch_one(self.pool)
            .await?;

        Ok(organization)
    }

    /// Replace every editable field of an organization
    pub async fn update(
        &self,
        organization_id: Uuid,
        req: &OrganizationRequest,
    ) -> Result<Organization> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE organizations SET ");
        let mut fields = query.separated(", ");
        fields.push("name = ").push_bind_unseparated(&req.name);
        fields.push("org_type = ").push_bind_unseparated(&req.org_type);
        fields.push("focus_area = ").push_bind_unseparated(&req.focus_area);
        fields.push("state_region = ").push_bind_unseparated(&req.state_region);
        fields.push("website = ").push_bind_unseparated(&req.website);
        fields.push("contact = ").push_bind_unseparated(&req.contact);
        fields.push("membership = ").push_bind_unseparated(&req.membership);
        fields.push("description = ").push_bind_unseparated(&req.description);
        fields.push("notes = ").push_bind_unseparated(&req.notes);
        fields.push("updated_at = now()");
        query.push(" WHERE organization_id = ");
        query.push_bind(organization_id);
        query.push(" RETURNING ");
        query.push(ORGANIZATION_COLUMNS);

        let organization = query
            .build_query_as::<Organization>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(organization)
    }

    pub async fn delete(&self, organization_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM organizations WHERE organization_id = $1")
            .bind(organization_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn stats(&self) -> Result<OrganizationStats> {
        let total_organizations =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM organizations")
                .fetch_one(self.pool)
                .await?;

        let by_state = sqlx::query_as::<_, GroupCountRow>(
            r#"
            SELECT state_region AS label, COUNT(*) AS count
            FROM organizations
            GROUP BY state_region
            ORDER BY count DESC, state_region NULLS LAST
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let by_type = sqlx::query_as::<_, GroupCountRow>(
            r#"
            SELECT org_type AS label, COUNT(*) AS count
            FROM organizations
            GROUP BY org_type
            ORDER BY count DESC, org_type NULLS LAST
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(OrganizationStats {
            total_organizations,
            by_state: by_state
                .into_iter()
                .map(|row| RegionCount {
                    state: row.label,
                    count: row.count,
                })
                .collect(),
            by_type: by_type
                .into_iter()
                .map(|row| OrganizationTypeCount {
                    org_type: row.label,
                    count: row.count,
                })
                .collect(),
        })
    }

    /// Every organization, ordered by state or region then name
    pub async fn export(&self) -> Result<Vec<Organization>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(ORGANIZATION_COLUMNS);
        query.push(" FROM organizations ORDER BY state_region NULLS FIRST, name, organization_id");

        let organizations = query
            .build_query_as::<Organization>()
            .fetch_all(self.pool)
            .await?;

        Ok(organizations)
    }
}
