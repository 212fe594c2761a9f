use super::*;

/// Tests counting and moving attestation references to another user.
///
/// Verifies that both creator and deliverer references are counted and moved.
///
/// Expected: 2 references before, 0 after, target holds both
#[tokio::test]
async fn moves_creator_and_deliverer_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leaving = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_attestation(db, leaving.id).await?;
    let delivered = factory::create_attestation(db, other.id).await?;

    let repo = AttestationRepository::new(db);
    repo.mark_delivered(delivered.id, STATUS_DEPOSE, STATUS_LIVRE, leaving.id)
        .await?;

    assert_eq!(repo.count_referencing_user(leaving.id).await?, 2);

    let moved = repo.reassign_user(leaving.id, target.id).await?;

    assert_eq!(moved, 2);
    assert_eq!(repo.count_referencing_user(leaving.id).await?, 0);
    assert_eq!(repo.count_referencing_user(target.id).await?, 2);

    Ok(())
}
