/// Species endpoints
///
/// - `POST   /create-species` - Create a species and its companion image
/// - `GET    /species` - List all species
/// - `PUT    /species/:id` - Replace a species' attributes
/// - `DELETE /species/:id` - Delete a species and its linked images
///
/// Listing returns species records only; image payloads are not joined in.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{required, AppJson},
};
use arboretum_shared::models::species::{CreateSpecies, Species, UpdateSpecies};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body for both create and update
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,

    #[validate(required(message = "quantity is required"))]
    pub quantity: Option<f64>,

    #[validate(required(message = "height is required"))]
    pub height: Option<f64>,

    #[validate(required(message = "trunkSize is required"))]
    pub trunk_size: Option<f64>,

    /// Encoded image; stored on the companion image record at creation,
    /// ignored on update
    pub image: Option<String>,
}

/// Create/update response
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeciesResponse {
    pub message: String,
    pub species: Species,
}

/// Bare message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

struct SpeciesFields {
    name: String,
    quantity: f64,
    height: f64,
    trunk_size: f64,
}

impl SpeciesRequest {
    /// Validates the body and splits it into attributes and image payload
    fn into_fields(self) -> ApiResult<(SpeciesFields, Option<String>)> {
        self.validate()?;

        let fields = SpeciesFields {
            name: required(self.name, "name")?,
            quantity: required(self.quantity, "quantity")?,
            height: required(self.height, "height")?,
            trunk_size: required(self.trunk_size, "trunkSize")?,
        };

        Ok((fields, self.image))
    }
}

/// Unknown and malformed IDs both mean "no such species"
fn parse_species_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound("Species not found".to_string()))
}

/// Creates a species together with an image record linked to it
///
/// ```text
/// POST /create-species
/// { "name": "Oak", "quantity": 5, "height": 10, "trunkSize": 2, "image": "data:image/png;base64,..." }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: A required field is missing
/// - `500 Internal Server Error`: Store failure (nothing is persisted)
pub async fn create_species(
    State(state): State<AppState>,
    AppJson(req): AppJson<SpeciesRequest>,
) -> ApiResult<Json<SpeciesResponse>> {
    let (fields, image) = req.into_fields()?;

    let (species, image) = state
        .store
        .create_species(CreateSpecies {
            name: fields.name,
            quantity: fields.quantity,
            height: fields.height,
            trunk_size: fields.trunk_size,
            image,
        })
        .await?;

    tracing::info!(species_id = %species.id, image_id = %image.id, "Species created");

    Ok(Json(SpeciesResponse {
        message: "Species created successfully".to_string(),
        species,
    }))
}

/// Lists every species
pub async fn list_species(State(state): State<AppState>) -> ApiResult<Json<Vec<Species>>> {
    Ok(Json(state.store.list_species().await?))
}

/// Replaces a species' name, quantity, height and trunk size
///
/// # Errors
///
/// - `400 Bad Request`: A required field is missing
/// - `404 Not Found`: No species with this ID
pub async fn update_species(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<SpeciesRequest>,
) -> ApiResult<Json<SpeciesResponse>> {
    let (fields, _image) = req.into_fields()?;
    let id = parse_species_id(&id)?;

    let species = state
        .store
        .update_species(
            id,
            UpdateSpecies {
                name: fields.name,
                quantity: fields.quantity,
                height: fields.height,
                trunk_size: fields.trunk_size,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Species not found".to_string()))?;

    tracing::info!(species_id = %species.id, "Species updated");

    Ok(Json(SpeciesResponse {
        message: "Species updated successfully".to_string(),
        species,
    }))
}

/// Deletes a species and every image linked to it
///
/// # Errors
///
/// - `404 Not Found`: No species with this ID
pub async fn delete_species(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_species_id(&id)?;

    if !state.store.delete_species(id).await? {
        return Err(ApiError::NotFound("Species not found".to_string()));
    }

    tracing::info!(species_id = %id, "Species deleted");

    Ok(Json(MessageResponse {
        message: "Species deleted successfully".to_string(),
    }))
}
