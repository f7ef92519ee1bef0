//! Plant entity model and DTOs.

use leaflink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A live row from the `plants` table.
///
/// Image bytes are not part of this struct; list and get
/// queries only report whether a photo exists and its MIME type.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: DbId,
    pub name: String,
    pub species: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    /// Free-form date string, stored as given.
    pub purchase_date: Option<String>,
    pub image_type: Option<String>,
    pub has_image: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Stored photo for a live plant.
#[derive(Debug, Clone, FromRow)]
pub struct PlantImage {
    pub id: DbId,
    pub name: String,
    /// `None` when the plant has never had a photo uploaded.
    pub image_data: Option<Vec<u8>>,
    pub image_type: Option<String>,
}

/// DTO for creating a new plant.
///
/// Server-assigned fields (`id`, `createdAt`, `updatedAt`) are not part of
/// the DTO, so any values a client sends for them are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlant {
    #[validate(custom(function = "leaflink_core::validation::non_blank"))]
    pub name: String,
    pub species: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub purchase_date: Option<String>,
}

/// DTO for replacing the editable fields of an existing plant.
///
/// This is a full overwrite, not a patch: an omitted optional field is
/// written back as `NULL`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlant {
    #[validate(custom(function = "leaflink_core::validation::non_blank"))]
    pub name: String,
    pub species: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub purchase_date: Option<String>,
}
