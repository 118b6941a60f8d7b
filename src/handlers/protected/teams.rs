// handlers/protected/teams.rs - GET /api/teams/:team_id/members handler

use axum::extract::Path;
use uuid::Uuid;

use crate::database::{DatabaseManager, TeamMemberDto, TeamRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/teams/:team_id/members - team roster
pub async fn members(Path(team_id): Path<String>) -> ApiResult<Vec<TeamMemberDto>> {
    let team_id = Uuid::parse_str(&team_id)
        .map_err(|_| ApiError::bad_request(format!("Invalid team id '{}'", team_id)))?;

    let pool = DatabaseManager::pool().await?;
    let members = TeamRepository::new(pool).list_members(team_id).await?;
    Ok(ApiResponse::success(members))
}
