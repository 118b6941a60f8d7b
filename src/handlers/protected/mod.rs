pub mod teams;
pub mod users;

pub use teams::members as team_members;
pub use users::me as user_me;
