//! Database-backed tests for the user repository.

use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use sqlx::PgPool;

fn admin_input(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        name: "Test Admin".to_string(),
        password_hash: "$argon2id$test-hash".to_string(),
        role: "ADMIN".to_string(),
    }
}

/// Lookup is case-insensitive on both sides: an account created with a
/// mixed-case address resolves no matter how the login spells it.
#[sqlx::test(migrations = "./migrations")]
async fn find_by_email_ignores_case_of_stored_and_presented_values(pool: PgPool) {
    let created = UserRepo::create(&pool, &admin_input("Admin@Example.COM"))
        .await
        .expect("user creation should succeed");

    for presented in ["admin@example.com", "ADMIN@EXAMPLE.COM", "Admin@Example.COM"] {
        let found = UserRepo::find_by_email(&pool, presented)
            .await
            .expect("lookup should not error")
            .unwrap_or_else(|| panic!("{presented} should resolve"));
        assert_eq!(found.id, created.id);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_email_misses_unknown_address(pool: PgPool) {
    let found = UserRepo::find_by_email(&pool, "nobody@example.com")
        .await
        .expect("lookup should not error");
    assert!(found.is_none());
}
