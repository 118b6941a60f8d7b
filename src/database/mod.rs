pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::{TeamMemberDto, UserProfile};
pub use repository::{ProfileSync, TeamRepository, UserProfileRepository};
