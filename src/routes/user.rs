use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use moodmeet_shared::{
    event::Event,
    user::{ApiStatus, Profile, ProfileUpdate, StatusResponse, UploadResponse},
};
use time::OffsetDateTime;

use crate::error::{ApiError, ApiJson, ApiResult};

use super::AppState;

/// Public prefix of stored profile images, served from the uploads directory.
pub const UPLOADS_PREFIX: &str = "uploads";

pub async fn profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Profile>> {
    state
        .user_command
        .profile(user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User not found".to_owned()))
}

pub async fn update(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProfileUpdate>,
) -> ApiResult<Json<StatusResponse>> {
    state.user_command.update_profile(input).await?;

    Ok(Json(StatusResponse::success()))
}

pub async fn events(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.event_command.interested_events(user_id).await?))
}

#[tracing::instrument(skip_all)]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut user_id = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);

        match name.as_deref() {
            Some("user_id") => {
                let value = field.text().await?;
                user_id = value.trim().parse::<i64>().ok();
            }
            Some("profile_image") => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let bytes = field.bytes().await?;
                file = Some((file_name, bytes));
            }
            _ => {}
        }
    }

    let Some((file_name, bytes)) = file else {
        return Err(ApiError::BadRequest("No file uploaded".to_owned()));
    };

    let Some(user_id) = user_id else {
        return Err(ApiError::BadRequest("Missing user_id".to_owned()));
    };

    if !state.user_command.exists(user_id).await? {
        return Err(ApiError::NotFound("User not found".to_owned()));
    }

    let timestamp = OffsetDateTime::now_utc().unix_timestamp();
    let file_name = format!("{user_id}_{timestamp}_{}", secure_filename(&file_name));

    tokio::fs::create_dir_all(&state.uploads_dir).await?;
    tokio::fs::write(state.uploads_dir.join(&file_name), &bytes).await?;

    let path = format!("{UPLOADS_PREFIX}/{file_name}");
    state
        .user_command
        .set_profile_image(user_id, path.clone())
        .await?;

    tracing::info!(user_id, %path, size = bytes.len(), "profile image stored");

    Ok(Json(UploadResponse {
        status: ApiStatus::Success,
        profile_image: Some(path),
        error: None,
    }))
}

/// Reduces a client file name to ASCII letters, digits, `.`, `-` and `_`.
fn secure_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let cleaned = cleaned.trim_start_matches(['.', '_']);

    if cleaned.is_empty() {
        "upload".to_owned()
    } else {
        cleaned.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::secure_filename;

    #[test]
    fn test_secure_filename_strips_directories() {
        assert_eq!(secure_filename("../../etc/passwd"), "passwd");
        assert_eq!(secure_filename("C:\\photos\\me.png"), "me.png");
    }

    #[test]
    fn test_secure_filename_replaces_whitespace() {
        assert_eq!(secure_filename("my summer pic.jpg"), "my_summer_pic.jpg");
    }

    #[test]
    fn test_secure_filename_falls_back_when_empty() {
        assert_eq!(secure_filename("..."), "upload");
        assert_eq!(secure_filename("日本.png"), "png");
        assert_eq!(secure_filename(""), "upload");
    }
}
