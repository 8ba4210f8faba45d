use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::RegionDto;
use crate::features::regions::models::Region;

/// Service for managing Northwind regions
pub struct RegionService {
    pool: PgPool,
}

impl RegionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all regions. Signals not-found when the table is empty rather
    /// than returning an empty list.
    pub async fn list(&self) -> Result<Vec<Region>> {
        let regions = sqlx::query_as::<_, Region>(
            r#"
            SELECT region_id, region_description, row_version
            FROM region
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch regions: {:?}", e);
            AppError::Database(e)
        })?;

        if regions.is_empty() {
            return Err(AppError::NotFound("No regions found.".to_string()));
        }

        Ok(regions)
    }

    /// Get a region by its id
    pub async fn get(&self, id: i32) -> Result<Region> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            SELECT region_id, region_description, row_version
            FROM region
            WHERE region_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch region {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Region with ID {} not found.", id)))?;

        Ok(region)
    }

    /// Insert a new region with its caller-assigned id. There is no
    /// duplicate-key pre-check; a colliding id surfaces as a store error.
    pub async fn create(&self, dto: RegionDto) -> Result<Region> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            INSERT INTO region (region_id, region_description)
            VALUES ($1, $2)
            RETURNING region_id, region_description, row_version
            "#,
        )
        .bind(dto.region_id)
        .bind(&dto.region_description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create region {}: {:?}", dto.region_id, e);
            AppError::Database(e)
        })?;

        tracing::info!("Region created: id={}", region.region_id);

        Ok(region)
    }

    /// Replace a region wholesale. When the payload carries a concurrency
    /// token, the write commits only against a row still at that version.
    /// A write that lands on no rows is disambiguated by an existence
    /// re-check: vanished row means not-found, surviving row means the
    /// store detected a concurrent modification.
    pub async fn update(&self, id: i32, dto: RegionDto) -> Result<()> {
        let result = match dto.row_version {
            Some(version) => {
                sqlx::query(
                    r#"
                    UPDATE region
                    SET region_description = $2, row_version = row_version + 1
                    WHERE region_id = $1 AND row_version = $3
                    "#,
                )
                .bind(id)
                .bind(&dto.region_description)
                .bind(version)
                .execute(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    UPDATE region
                    SET region_description = $2, row_version = row_version + 1
                    WHERE region_id = $1
                    "#,
                )
                .bind(id)
                .bind(&dto.region_description)
                .execute(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to update region {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            if !self.exists(id).await? {
                return Err(AppError::NotFound(format!(
                    "Region with ID {} not found.",
                    id
                )));
            }
            return Err(AppError::Conflict(format!(
                "Region with ID {} was modified concurrently.",
                id
            )));
        }

        tracing::info!("Region updated: id={}", id);

        Ok(())
    }

    /// Delete a region by id, re-checking existence immediately before
    /// removal within the same request.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let region = self.get(id).await?;

        sqlx::query("DELETE FROM region WHERE region_id = $1")
            .bind(region.region_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete region {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!("Region deleted: id={}", id);

        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM region WHERE region_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check region {} existence: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(exists)
    }
}
