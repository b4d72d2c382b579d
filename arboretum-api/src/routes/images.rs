/// Standalone image upload
///
/// - `POST /speciesImg` - Store an image that is not linked to any species

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{required, AppJson},
};
use arboretum_shared::models::image::{CreateImage, Image};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upload request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "imageBase64 is required"),
        length(min = 1, message = "imageBase64 is required")
    )]
    pub image_base64: Option<String>,
}

/// Upload response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadImageResponse {
    pub message: String,
    pub image: Image,
}

/// Stores an unlinked image
///
/// ```text
/// POST /speciesImg
/// { "name": "Oak", "imageBase64": "data:image/png;base64,..." }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Name or image missing
pub async fn upload_image(
    State(state): State<AppState>,
    AppJson(req): AppJson<UploadImageRequest>,
) -> ApiResult<Json<UploadImageResponse>> {
    req.validate()?;
    let name = required(req.name, "name")?;
    let image_base64 = required(req.image_base64, "imageBase64")?;

    let image = state
        .store
        .create_image(CreateImage {
            name,
            image: Some(image_base64),
            species_id: None,
        })
        .await?;

    tracing::info!(image_id = %image.id, "Image uploaded");

    Ok(Json(UploadImageResponse {
        message: "Image uploaded successfully".to_string(),
        image,
    }))
}
