// handlers/protected/users.rs - GET /api/users/me handler

use axum::extract::Extension;

use crate::database::{DatabaseManager, ProfileSync, UserProfile, UserProfileRepository};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /api/users/me - sync the caller's profile from their token and return it
pub async fn me(Extension(auth_user): Extension<AuthUser>) -> ApiResult<UserProfile> {
    let pool = DatabaseManager::pool().await?;
    let sync = ProfileSync::new(auth_user.external_id, &auth_user.email, auth_user.display_name);

    let profile = UserProfileRepository::new(pool).sync_from_identity(&sync).await?;
    tracing::info!("Synced profile {} for {}", profile.id, profile.external_id);

    Ok(ApiResponse::success(profile))
}
