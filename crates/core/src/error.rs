use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Plant {plant_id} has no image")]
    ImageNotFound { plant_id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
