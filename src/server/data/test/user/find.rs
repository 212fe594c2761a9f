use super::*;

/// Tests looking up a user by username.
///
/// Verifies that `find_by_username` returns the matching user and `None` for an unknown
/// username.
///
/// Expected: Ok(Some) then Ok(None)
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user_with_role(db, "ROLE_MANAGER").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username(&manager.username).await?.unwrap();
    assert_eq!(found.id, manager.id);
    assert_eq!(found.role, Role::Manager);

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests the username and email existence checks.
///
/// Expected: true for stored values, false otherwise
#[tokio::test]
async fn reports_existing_username_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.exists_by_username(&user.username).await?);
    assert!(repo.exists_by_email(&user.email).await?);
    assert!(!repo.exists_by_username("ghost").await?);
    assert!(!repo.exists_by_email("ghost@dgi.ma").await?);

    Ok(())
}

/// Tests reading a user whose stored role is not a known value.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_role(db, "ROLE_AUDITOR").await?;

    let result = UserRepository::new(db).find_by_id(user.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests listing users.
///
/// Verifies that users come back ordered by ID and that `get_first` honours its limit.
///
/// Expected: Ok with all users, then the first two
#[tokio::test]
async fn lists_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let all: Vec<i32> = repo.get_all().await?.into_iter().map(|u| u.id).collect();
    assert_eq!(all, vec![first.id, second.id, third.id]);

    let limited = repo.get_first(2).await?;
    assert_eq!(limited.len(), 2);

    Ok(())
}
