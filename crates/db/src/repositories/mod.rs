//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod contact_message_repo;
pub mod project_repo;
pub mod session_repo;
pub mod site_settings_repo;
pub mod user_repo;

pub use contact_message_repo::ContactMessageRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use site_settings_repo::SiteSettingsRepo;
pub use user_repo::UserRepo;
