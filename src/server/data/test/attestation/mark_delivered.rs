use super::*;

/// Tests recording a delivery.
///
/// Verifies that the status, the deliverer and the deliverer's username are set.
///
/// Expected: Ok(true) and the attestation reads back as `livré`
#[tokio::test]
async fn marks_attestation_delivered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;
    let manager = factory::create_user_with_role(db, "ROLE_MANAGER").await?;
    let attestation = factory::create_attestation(db, frontdesk.id).await?;

    let repo = AttestationRepository::new(db);
    let updated = repo
        .mark_delivered(attestation.id, STATUS_DEPOSE, STATUS_LIVRE, manager.id)
        .await?;
    assert!(updated);

    let delivered = repo.find_by_id(attestation.id).await?.unwrap();
    assert_eq!(delivered.status, STATUS_LIVRE);
    assert_eq!(delivered.delivered_by_id, Some(manager.id));
    assert_eq!(delivered.delivered_by_username, Some(manager.username));
    assert_eq!(delivered.creator_id, Some(frontdesk.id));
    assert!(delivered.updated_at >= attestation.updated_at);

    Ok(())
}

/// Tests a second delivery of the same attestation.
///
/// Verifies that the status guard rejects the write and the first deliverer is kept.
///
/// Expected: Ok(false) and `delivered_by_id` unchanged
#[tokio::test]
async fn second_delivery_leaves_first_deliverer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;
    let first = factory::create_user_with_role(db, "ROLE_MANAGER").await?;
    let second = factory::create_user_with_role(db, "ROLE_MANAGER").await?;
    let attestation = factory::create_attestation(db, frontdesk.id).await?;

    let repo = AttestationRepository::new(db);
    assert!(
        repo.mark_delivered(attestation.id, STATUS_DEPOSE, STATUS_LIVRE, first.id)
            .await?
    );
    assert!(
        !repo
            .mark_delivered(attestation.id, STATUS_DEPOSE, STATUS_LIVRE, second.id)
            .await?
    );

    let delivered = repo.find_by_id(attestation.id).await?.unwrap();
    assert_eq!(delivered.delivered_by_id, Some(first.id));

    Ok(())
}

/// Tests delivering an attestation that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;

    let updated = AttestationRepository::new(db)
        .mark_delivered(5, STATUS_DEPOSE, STATUS_LIVRE, manager.id)
        .await?;

    assert!(!updated);

    Ok(())
}
