use super::*;

/// Tests the bulk state advance for one creator and day.
///
/// Verifies that only the creator's `NOUVEAU` requests filed on the given day move to
/// `EN_TRAITEMENT`; older requests, other creators and other states are left alone.
///
/// Expected: Ok(1)
#[tokio::test]
async fn advances_only_todays_new_requests_of_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;
    let colleague = factory::create_user(db).await?;

    let today = factory::create_request(db, frontdesk.id).await?;
    let yesterday = RequestFactory::new(db, frontdesk.id)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let rejected = RequestFactory::new(db, frontdesk.id)
        .etat("REJETE")
        .build()
        .await?;
    let theirs = factory::create_request(db, colleague.id).await?;

    let repo = RequestRepository::new(db);
    let count = repo
        .advance_state_for_creator_on(
            frontdesk.id,
            Utc::now().date_naive(),
            ETAT_NOUVEAU,
            ETAT_EN_TRAITEMENT,
        )
        .await?;

    assert_eq!(count, 1);

    let expected = [
        (today.id, ETAT_EN_TRAITEMENT),
        (yesterday.id, ETAT_NOUVEAU),
        (rejected.id, "REJETE"),
        (theirs.id, ETAT_NOUVEAU),
    ];
    for (id, etat) in expected {
        let request = repo.find_by_id(id).await?.unwrap();
        assert_eq!(request.etat.as_deref(), Some(etat));
    }

    Ok(())
}

/// Tests the bulk state advance with nothing to move.
///
/// Expected: Ok(0)
#[tokio::test]
async fn advance_with_no_matches_returns_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;

    let count = RequestRepository::new(db)
        .advance_state_for_creator_on(
            frontdesk.id,
            Utc::now().date_naive(),
            ETAT_NOUVEAU,
            ETAT_EN_TRAITEMENT,
        )
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
