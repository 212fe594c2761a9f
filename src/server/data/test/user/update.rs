use super::*;

/// Tests a partial user update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(Some) with new email and role, username untouched
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UserChanges {
                email: Some("new.address@dgi.ma".to_string()),
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, user.username);
    assert_eq!(updated.email, "new.address@dgi.ma");
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.password_hash, user.password);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(404, UserChanges::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
