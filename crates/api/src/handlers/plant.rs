//! Handlers for the `/plants` resource and its photo sub-resource.
//!
//! `/plants[/{id}]` and `/plants/{id}/image`

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use leaflink_core::error::CoreError;
use leaflink_core::media::{mime_type_for_file_name, FALLBACK_MIME_TYPE};
use leaflink_core::types::DbId;
use leaflink_db::models::plant::{CreatePlant, Plant, UpdatePlant};
use leaflink_db::repositories::PlantRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::response::MessageResponse;
use crate::routes::API_PREFIX;
use crate::state::AppState;

/// Multipart form field carrying the uploaded photo.
pub const IMAGE_FIELD: &str = "image";

/// A plant as returned by every endpoint.
///
/// `imageUrl` is only present when a photo is stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantResponse {
    #[serde(flatten)]
    pub plant: Plant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<Plant> for PlantResponse {
    fn from(plant: Plant) -> Self {
        let image_url = plant
            .has_image
            .then(|| format!("{API_PREFIX}/plants/{}/image", plant.id));
        Self { plant, image_url }
    }
}

/// `{ "plants": [...] }` list envelope.
#[derive(Debug, Serialize)]
pub struct PlantListResponse {
    pub plants: Vec<PlantResponse>,
}

/// Short summary of the plant whose photo was just replaced.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSummary {
    pub id: DbId,
    pub name: String,
    pub image_type: String,
}

/// Body returned by the photo upload endpoint.
#[derive(Debug, Serialize)]
pub struct ImageUploadResponse {
    pub message: &'static str,
    pub plant: ImageSummary,
}

fn plant_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Plant",
        id,
    })
}

/// GET /api/plants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<PlantListResponse>> {
    let plants = PlantRepo::list(&state.pool).await?;
    Ok(Json(PlantListResponse {
        plants: plants.into_iter().map(PlantResponse::from).collect(),
    }))
}

/// POST /api/plants
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreatePlant>,
) -> AppResult<(StatusCode, Json<PlantResponse>)> {
    let plant = PlantRepo::create(&state.pool, &input).await?;
    tracing::info!(plant_id = plant.id, name = %plant.name, "Plant created");
    Ok((StatusCode::CREATED, Json(plant.into())))
}

/// GET /api/plants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<PlantResponse>> {
    let plant = PlantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| plant_not_found(id))?;
    Ok(Json(plant.into()))
}

/// PUT /api/plants/{id}
///
/// Replaces every editable field; omitted optional fields are cleared.
/// `id` and `createdAt` are always kept from the stored row.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdatePlant>,
) -> AppResult<Json<PlantResponse>> {
    let plant = PlantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| plant_not_found(id))?;
    Ok(Json(plant.into()))
}

/// DELETE /api/plants/{id}
///
/// Soft delete. Deleting an already-deleted plant is a 404.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    if !PlantRepo::soft_delete(&state.pool, id).await? {
        return Err(plant_not_found(id));
    }
    tracing::info!(plant_id = id, "Plant deleted");
    Ok(Json(MessageResponse {
        message: "Plant deleted successfully",
    }))
}

/// POST /api/plants/{id}/image
///
/// Accepts a multipart form with a required `image` file field. The bytes
/// are stored verbatim; the MIME type comes from the file name extension.
pub async fn upload_image(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ImageUploadResponse>> {
    let mut multipart = multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        // A plain text field named `image` is not a file part.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((file_name, data));
    }

    let (file_name, data) = upload.ok_or_else(|| {
        AppError::BadRequest(format!("Missing required '{IMAGE_FIELD}' file field"))
    })?;
    let image_type = mime_type_for_file_name(&file_name);

    let plant = PlantRepo::set_image(&state.pool, id, &data, image_type)
        .await?
        .ok_or_else(|| plant_not_found(id))?;
    tracing::info!(plant_id = id, image_type, bytes = data.len(), "Plant image uploaded");

    Ok(Json(ImageUploadResponse {
        message: "Image uploaded successfully",
        plant: ImageSummary {
            id: plant.id,
            name: plant.name,
            image_type: image_type.to_string(),
        },
    }))
}

/// GET /api/plants/{id}/image
///
/// Streams the stored bytes back with the stored MIME type. A missing plant
/// and a plant without a photo are both 404 but with distinct error codes.
pub async fn get_image(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let image = PlantRepo::find_image(&state.pool, id)
        .await?
        .ok_or_else(|| plant_not_found(id))?;
    let data = image
        .image_data
        .ok_or(AppError::Core(CoreError::ImageNotFound { plant_id: id }))?;
    let content_type = image
        .image_type
        .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string());

    Ok(([(header::CONTENT_TYPE, content_type)], data))
}
