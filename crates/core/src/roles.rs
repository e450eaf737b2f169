//! Well-known role name constants.
//!
//! These must match the `role` column values seeded by the initial
//! migration. The site has a single operator, so only the two admin
//! tiers exist.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_SUPER_ADMIN: &str = "SUPER_ADMIN";

/// Whether a role name grants access to the admin back-office.
pub fn is_admin_role(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_SUPER_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_tiers_are_admin_roles() {
        assert!(is_admin_role(ROLE_ADMIN));
        assert!(is_admin_role(ROLE_SUPER_ADMIN));
    }

    #[test]
    fn other_roles_are_rejected() {
        assert!(!is_admin_role("USER"));
        assert!(!is_admin_role("admin"));
        assert!(!is_admin_role(""));
    }
}
