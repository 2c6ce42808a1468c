use sqlx::PgPool;
use storage::{
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    error::Result,
    models::SeriesCategory,
    repository::{category::CategoryRepository, series::SeriesRepository},
};
use uuid::Uuid;

/// Categories of a series in display order
pub async fn list_categories(pool: &PgPool, series_id: Uuid) -> Result<Vec<SeriesCategory>> {
    SeriesRepository::new(pool).find_by_id(series_id).await?;

    let repo = CategoryRepository::new(pool);
    repo.list(series_id).await
}

pub async fn get_category(
    pool: &PgPool,
    series_id: Uuid,
    category_id: Uuid,
) -> Result<SeriesCategory> {
    let repo = CategoryRepository::new(pool);
    repo.find(series_id, category_id).await
}

pub async fn create_category(
    pool: &PgPool,
    series_id: Uuid,
    request: &CreateCategoryRequest,
) -> Result<SeriesCategory> {
    SeriesRepository::new(pool).find_by_id(series_id).await?;

    let repo = CategoryRepository::new(pool);
    repo.create(series_id, request).await
}

pub async fn update_category(
    pool: &PgPool,
    series_id: Uuid,
    category_id: Uuid,
    request: &UpdateCategoryRequest,
) -> Result<SeriesCategory> {
    let repo = CategoryRepository::new(pool);
    repo.update(series_id, category_id, request).await
}

/// Delete a category and every point entry recorded in it
pub async fn delete_category(pool: &PgPool, series_id: Uuid, category_id: Uuid) -> Result<()> {
    let repo = CategoryRepository::new(pool);
    repo.delete(series_id, category_id).await
}
