//! Pure domain logic for the portfolio backend.
//!
//! This crate has no internal dependencies and no I/O. It holds the error
//! taxonomy, shared type aliases, role constants, and the contact-message
//! trust pipeline (client-IP resolution, anonymization, salted hashing,
//! spam scoring) so the API and repository layers can share them.

pub mod client_ip;
pub mod error;
pub mod hashing;
pub mod paging;
pub mod roles;
pub mod spam;
pub mod types;
