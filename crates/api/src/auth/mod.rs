//! Authentication: JWT codec, Argon2id password hashing, and the
//! cookie-backed session manager.

pub mod jwt;
pub mod password;
pub mod session;
