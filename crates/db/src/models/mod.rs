//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches where applicable

pub mod contact_message;
pub mod project;
pub mod session;
pub mod site_settings;
pub mod user;
