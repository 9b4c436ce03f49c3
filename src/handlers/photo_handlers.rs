use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Json, State};
use axum::http::header;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, UpstreamError};
use crate::utils::phone::normalize_phone;
use crate::utils::retry::retry_with_fixed_delay;
use crate::AppState;

/// Always-available avatar shown whenever no real photo can be resolved.
pub const DEFAULT_AVATAR_URL: &str = "https://media.istockphoto.com/id/1337144146/vector/default-avatar-profile-icon-vector.jpg?s=612x612&w=0&k=20&c=BIbFwuv7FxTWvh5S3vB6bkT0Qv8Vn8N5Ffseq84ClGI=";

/// The webhook reports "no photo" by linking its stock icon instead of
/// omitting the field.
pub const NO_PHOTO_SENTINEL: &str = "no-user-image-icon";

#[derive(Debug, Deserialize)]
pub struct WhatsappPhotoRequest {
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct WhatsappPhotoResponse {
    pub success: bool,
    pub result: String,
    pub is_photo_private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamPhotoPayload {
    #[serde(default)]
    pub link: Option<String>,
}

pub async fn fetch_whatsapp_photo(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WhatsappPhotoRequest>,
) -> Result<Json<WhatsappPhotoResponse>, ApiError> {
    const UPSTREAM_ATTEMPTS: u32 = 2;
    const RETRY_DELAY: Duration = Duration::from_secs(1);
    const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

    let normalized = normalize_phone(&request.phone)?;
    tracing::debug!("looking up profile photo for a {}-digit number", normalized.len());

    let client = Client::new();
    let webhook_url = state.config.webhook_url.clone();
    let origin = state.config.public_origin.clone();

    let response = retry_with_fixed_delay(UPSTREAM_ATTEMPTS, RETRY_DELAY, || {
        let client = client.clone();
        let webhook_url = webhook_url.clone();
        let origin = origin.clone();
        let tel = normalized.clone();
        async move {
            let response = client
                .get(&webhook_url)
                .query(&[("tel", tel.as_str())])
                .header(header::ACCEPT, "application/json")
                .header(header::ORIGIN, origin)
                .timeout(UPSTREAM_TIMEOUT)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                // Keep whatever the webhook said for the logs before
                // taking the retry path.
                let body = response.text().await.unwrap_or_default();
                return Err(UpstreamError::Status { status, body });
            }
            Ok(response)
        }
    })
    .await
    .map_err(|err| {
        tracing::error!("photo lookup failed after {} attempts: {}", UPSTREAM_ATTEMPTS, err);
        ApiError::UpstreamFailure(err)
    })?;

    let payload = response
        .json::<UpstreamPhotoPayload>()
        .await
        .map_err(ApiError::InvalidUpstreamResponse)?;

    let (result, is_photo_private) = resolve_photo_link(payload.link.as_deref());
    tracing::debug!("photo lookup succeeded, private: {}", is_photo_private);

    Ok(Json(WhatsappPhotoResponse {
        success: true,
        result,
        is_photo_private,
        error: None,
    }))
}

/// A photo counts as private when the webhook returned no link, an empty
/// one, or its no-photo sentinel; the caller then gets the default avatar.
fn resolve_photo_link(link: Option<&str>) -> (String, bool) {
    match link {
        Some(link) if !link.is_empty() && !link.contains(NO_PHOTO_SENTINEL) => {
            (link.to_string(), false)
        }
        _ => (DEFAULT_AVATAR_URL.to_string(), true),
    }
}
