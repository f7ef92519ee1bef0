//! Repository for the `plants` table.

use chrono::Utc;
use leaflink_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::plant::{CreatePlant, Plant, PlantImage, UpdatePlant};

/// Column list shared across queries to avoid repetition.
///
/// Excludes `image_data` (BLOB), which is only read by [`PlantRepo::find_image`].
const COLUMNS: &str = "id, name, species, description, location, notes, purchase_date, \
     image_type, image_data IS NOT NULL AS has_image, created_at, updated_at";

/// Provides CRUD operations for plants plus photo storage.
///
/// Every mutation is a single statement filtered on `deleted_at IS NULL`,
/// so SQLite serializes racing writes to the same row and a soft-deleted
/// plant can never be modified.
pub struct PlantRepo;

impl PlantRepo {
    /// Insert a new plant, returning the created row.
    ///
    /// `created_at` and `updated_at` are set to the same instant.
    pub async fn create(pool: &SqlitePool, input: &CreatePlant) -> Result<Plant, sqlx::Error> {
        let query = format!(
            "INSERT INTO plants
                (name, species, description, location, notes, purchase_date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
             RETURNING {COLUMNS}"
        );
        let plant = sqlx::query_as::<_, Plant>(&query)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.notes)
            .bind(&input.purchase_date)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        tracing::debug!(plant_id = plant.id, "Inserted plant");
        Ok(plant)
    }

    /// Find a plant by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Plant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants WHERE id = ?1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Plant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all live plants in insertion order (`id` ascending).
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Plant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants WHERE deleted_at IS NULL ORDER BY id ASC");
        sqlx::query_as::<_, Plant>(&query).fetch_all(pool).await
    }

    /// Overwrite every editable field of a plant.
    ///
    /// `id`, `created_at`, and the stored photo are untouched. Returns `None`
    /// if no live row with the given `id` exists, in which case nothing is
    /// written.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdatePlant,
    ) -> Result<Option<Plant>, sqlx::Error> {
        let query = format!(
            "UPDATE plants SET
                name = ?2,
                species = ?3,
                description = ?4,
                location = ?5,
                notes = ?6,
                purchase_date = ?7,
                updated_at = ?8
             WHERE id = ?1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let plant = sqlx::query_as::<_, Plant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.notes)
            .bind(&input.purchase_date)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        if plant.is_some() {
            tracing::debug!(plant_id = id, "Updated plant");
        }
        Ok(plant)
    }

    /// Soft-delete a plant by ID. Returns `true` if a row was marked deleted.
    ///
    /// A plant that is already deleted is not matched, so a second call
    /// returns `false`.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE plants SET deleted_at = ?2, updated_at = ?2
             WHERE id = ?1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(plant_id = id, "Soft-deleted plant");
        }
        Ok(deleted)
    }

    /// Replace the stored photo of a live plant. Other metadata is untouched.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn set_image(
        pool: &SqlitePool,
        id: DbId,
        data: &[u8],
        image_type: &str,
    ) -> Result<Option<Plant>, sqlx::Error> {
        let query = format!(
            "UPDATE plants SET
                image_data = ?2,
                image_type = ?3,
                updated_at = ?4
             WHERE id = ?1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let plant = sqlx::query_as::<_, Plant>(&query)
            .bind(id)
            .bind(data)
            .bind(image_type)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        if plant.is_some() {
            tracing::debug!(plant_id = id, image_type, bytes = data.len(), "Stored plant image");
        }
        Ok(plant)
    }

    /// Load the photo of a live plant.
    ///
    /// Returns `None` if the plant does not exist or is deleted. A live plant
    /// without a photo yields `Some` with `image_data: None`.
    pub async fn find_image(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PlantImage>, sqlx::Error> {
        sqlx::query_as::<_, PlantImage>(
            "SELECT id, name, image_data, image_type FROM plants
             WHERE id = ?1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
