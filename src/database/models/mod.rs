pub mod team;
pub mod user_profile;

pub use team::TeamMemberDto;
pub use user_profile::UserProfile;
