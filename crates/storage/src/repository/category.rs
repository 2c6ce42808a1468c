use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{Result, StorageError};
use crate::models::SeriesCategory;

pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Categories of a series in display order
    pub async fn list(&self, series_id: Uuid) -> Result<Vec<SeriesCategory>> {
        let categories = sqlx::query_as::<_, SeriesCategory>(
            r#"
            SELECT category_id, series_id, name, description, sort_order, created_at
            FROM series_categories
            WHERE series_id = $1
            ORDER BY sort_order, name
            "#,
        )
        .bind(series_id)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn find(&self, series_id: Uuid, category_id: Uuid) -> Result<SeriesCategory> {
        let category = sqlx::query_as::<_, SeriesCategory>(
            r#"
            SELECT category_id, series_id, name, description, sort_order, created_at
            FROM series_categories
            WHERE series_id = $1 AND category_id = $2
            "#,
        )
        .bind(series_id)
        .bind(category_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    pub async fn create(
        &self,
        series_id: Uuid,
        req: &CreateCategoryRequest,
    ) -> Result<SeriesCategory> {
        let category = sqlx::query_as::<_, SeriesCategory>(
            r#"
            INSERT INTO series_categories (series_id, name, description, sort_order)
            VALUES ($1, $2, $3, $4)
            RETURNING category_id, series_id, name, description, sort_order, created_at
            "#,
        )
        .bind(series_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.sort_order)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    pub async fn update(
        &self,
        series_id: Uuid,
        category_id: Uuid,
        req: &UpdateCategoryRequest,
    ) -> Result<SeriesCategory> {
        let category = sqlx::query_as::<_, SeriesCategory>(
            r#"
            UPDATE series_categories
            SET
                name = COALESCE($3, name),
                description = CASE WHEN $4 THEN NULL ELSE COALESCE($5, description) END,
                sort_order = COALESCE($6, sort_order)
            WHERE series_id = $1 AND category_id = $2
            RETURNING category_id, series_id, name, description, sort_order, created_at
            "#,
        )
        .bind(series_id)
        .bind(category_id)
        .bind(&req.name)
        .bind(req.clear_description)
        .bind(&req.description)
        .bind(req.sort_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    pub async fn delete(&self, series_id: Uuid, category_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM series_categories WHERE series_id = $1 AND category_id = $2",
        )
        .bind(series_id)
        .bind(category_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
