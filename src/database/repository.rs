use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{unique_violation, DatabaseError};
use crate::database::models::{TeamMemberDto, UserProfile};

/// Identity fields pushed into `user_profiles` on sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSync {
    pub external_id: String,
    pub email: String,
    pub display_name: String,
}

impl ProfileSync {
    pub fn new(external_id: impl Into<String>, email: &str, display_name: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            email: normalize_email(email),
            display_name: display_name.into(),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

const UPSERT_PROFILE: &str = r#"
    INSERT INTO user_profiles (id, external_id, email, display_name, created_at, updated_at, last_synced_at)
    VALUES ($1, $2, $3, $4, now(), now(), now())
    ON CONFLICT (external_id) DO UPDATE
    SET email = EXCLUDED.email,
        display_name = EXCLUDED.display_name,
        updated_at = CASE
            WHEN user_profiles.email IS DISTINCT FROM EXCLUDED.email
              OR user_profiles.display_name IS DISTINCT FROM EXCLUDED.display_name
            THEN now()
            ELSE user_profiles.updated_at
        END,
        last_synced_at = now()
    RETURNING id, external_id, email, display_name, created_at, updated_at, last_synced_at
"#;

pub struct UserProfileRepository {
    pool: PgPool,
}

impl UserProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or refresh the profile keyed by the provider subject.
    pub async fn sync_from_identity(&self, sync: &ProfileSync) -> Result<UserProfile, DatabaseError> {
        sqlx::query_as::<_, UserProfile>(UPSERT_PROFILE)
            .bind(Uuid::new_v4())
            .bind(&sync.external_id)
            .bind(&sync.email)
            .bind(&sync.display_name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match unique_violation(&e) {
                Some(constraint) => {
                    tracing::warn!(
                        "Profile sync for '{}' violates {}",
                        sync.external_id,
                        constraint
                    );
                    DatabaseError::Conflict(format!("Email '{}' belongs to another profile", sync.email))
                }
                None => DatabaseError::Sqlx(e),
            })
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<UserProfile>, DatabaseError> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, external_id, email, display_name, created_at, updated_at, last_synced_at
            FROM user_profiles
            WHERE external_id = $1
            "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }
}

pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Members of a team ordered by display name. Unknown team is NotFound.
    pub async fn list_members(&self, team_id: Uuid) -> Result<Vec<TeamMemberDto>, DatabaseError> {
        let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(DatabaseError::NotFound(format!("Team {} not found", team_id)));
        }

        let members = sqlx::query_as::<_, TeamMemberDto>(
            r#"
            SELECT p.id AS user_id, p.display_name, p.email, m.role, m.joined_at
            FROM team_memberships m
            JOIN user_profiles p ON p.id = m.user_id
            WHERE m.team_id = $1
            ORDER BY p.display_name, p.email
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }
}
