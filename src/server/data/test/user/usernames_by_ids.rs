use super::*;

/// Tests resolving usernames for a set of IDs.
///
/// Verifies that known IDs are mapped to their usernames and unknown IDs are skipped.
///
/// Expected: Ok with two entries
#[tokio::test]
async fn maps_known_ids_to_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let usernames = UserRepository::new(db)
        .usernames_by_ids(&[a.id, b.id, 9999])
        .await?;

    assert_eq!(usernames.len(), 2);
    assert_eq!(usernames.get(&a.id), Some(&a.username));
    assert_eq!(usernames.get(&b.id), Some(&b.username));

    Ok(())
}

/// Tests resolving an empty ID list.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn empty_ids_yield_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let usernames = UserRepository::new(db).usernames_by_ids(&[]).await?;

    assert!(usernames.is_empty());

    Ok(())
}
