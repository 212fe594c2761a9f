use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores the hashed password and role value and returns the
/// user as a domain model.
///
/// Expected: Ok with the stored role parsed back into `Role`
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUser {
            username: "khadija".to_string(),
            email: "khadija@dgi.ma".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::Processing,
        })
        .await?;

    assert_eq!(user.username, "khadija");
    assert_eq!(user.role, Role::Processing);
    assert_eq!(user.password_hash, "$argon2id$stub");
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests creating two users with the same username.
///
/// Verifies that the unique constraint on username is enforced by the database.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .create(NewUser {
            username: existing.username,
            email: "other@dgi.ma".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Frontdesk,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
