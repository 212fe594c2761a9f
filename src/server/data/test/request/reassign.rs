use super::*;

/// Tests counting and reassigning request references.
///
/// Verifies that agent and creator references move separately and report their own
/// counts.
///
/// Expected: counts of 1 agent and 2 creator references moved to the target
#[tokio::test]
async fn reassigns_agent_and_creator_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leaving = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_request(db, leaving.id).await?;
    factory::create_request(db, leaving.id).await?;
    RequestFactory::new(db, other.id)
        .agent(leaving.id)
        .build()
        .await?;

    let repo = RequestRepository::new(db);
    assert_eq!(repo.count_by_creator(leaving.id).await?, 2);
    assert_eq!(repo.count_by_agent(leaving.id).await?, 1);

    assert_eq!(repo.reassign_agent(leaving.id, target.id).await?, 1);
    assert_eq!(repo.reassign_creator(leaving.id, target.id).await?, 2);

    assert_eq!(repo.count_by_creator(leaving.id).await?, 0);
    assert_eq!(repo.count_by_agent(leaving.id).await?, 0);
    assert_eq!(repo.count_by_creator(target.id).await?, 2);
    assert_eq!(repo.count_by_agent(target.id).await?, 1);

    Ok(())
}

/// Tests reassigning inside a transaction that is rolled back.
///
/// Verifies that the repository runs on a transaction and that nothing it wrote survives
/// the rollback.
///
/// Expected: references still point at the original user
#[tokio::test]
async fn rolled_back_reassignment_leaves_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leaving = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    factory::create_request(db, leaving.id).await?;

    let txn = db.begin().await?;
    assert_eq!(
        RequestRepository::new(&txn)
            .reassign_creator(leaving.id, target.id)
            .await?,
        1
    );
    txn.rollback().await?;

    let repo = RequestRepository::new(db);
    assert_eq!(repo.count_by_creator(leaving.id).await?, 1);
    assert_eq!(repo.count_by_creator(target.id).await?, 0);

    Ok(())
}
