use super::*;

/// Tests filtering requests by creator and by agent.
///
/// Expected: each query returns only the matching requests
#[tokio::test]
async fn filters_by_creator_and_agent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let agent = factory::create_user_with_role(db, "ROLE_PROCESSING").await?;

    let mine = RequestFactory::new(db, frontdesk.id)
        .agent(agent.id)
        .build()
        .await?;
    factory::create_request(db, other.id).await?;

    let repo = RequestRepository::new(db);

    let by_creator = repo.get_by_creator(frontdesk.id).await?;
    assert_eq!(by_creator.len(), 1);
    assert_eq!(by_creator[0].id, mine.id);

    let by_agent = repo.get_by_agent(agent.id).await?;
    assert_eq!(by_agent.len(), 1);
    assert_eq!(by_agent[0].agent_username, Some(agent.username));

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}

/// Tests filtering requests by exact workflow state.
///
/// Expected: only the `EN_TRAITEMENT` request is returned
#[tokio::test]
async fn filters_by_exact_etat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    factory::create_request(db, creator.id).await?;
    let queued = RequestFactory::new(db, creator.id)
        .etat(ETAT_EN_TRAITEMENT)
        .build()
        .await?;

    let result = RequestRepository::new(db)
        .get_by_etat(ETAT_EN_TRAITEMENT)
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, queued.id);

    Ok(())
}

/// Tests substring search on name and CIN.
///
/// Verifies that matching ignores case.
///
/// Expected: one hit for each query, none for an unrelated query
#[tokio::test]
async fn searches_name_and_cin_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let target = RequestFactory::new(db, creator.id)
        .name("Societe Atlas Negoce")
        .cin(Some("JK908070"))
        .build()
        .await?;
    RequestFactory::new(db, creator.id)
        .name("Benjelloun Omar")
        .cin(Some("AA100200"))
        .build()
        .await?;

    let repo = RequestRepository::new(db);

    let by_name = repo.search_by_name("atlas").await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, target.id);

    let by_cin = repo.search_by_cin("jk908").await?;
    assert_eq!(by_cin.len(), 1);
    assert_eq!(by_cin[0].id, target.id);

    assert!(repo.search_by_name("zzz").await?.is_empty());

    Ok(())
}

/// Tests name search on accented names.
///
/// Verifies that accented capitals fold to lowercase and that `%` in the query is not a
/// wildcard.
///
/// Expected: the accented query hits the stored name, the `%` query hits nothing
#[tokio::test]
async fn searches_accented_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let target = RequestFactory::new(db, creator.id)
        .name("ÉTABLISSEMENTS Ouazzani")
        .build()
        .await?;
    RequestFactory::new(db, creator.id)
        .name("Etablissements Alami")
        .build()
        .await?;

    let repo = RequestRepository::new(db);

    let by_name = repo.search_by_name("établissements").await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, target.id);

    assert!(repo.search_by_name("%Ouazzani").await?.is_empty());

    Ok(())
}

/// Tests CIN search skipping requests that have no CIN.
///
/// Expected: only the request carrying a CIN matches an empty query
#[tokio::test]
async fn cin_search_skips_requests_without_cin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let with_cin = RequestFactory::new(db, creator.id)
        .cin(Some("EE445566"))
        .build()
        .await?;
    RequestFactory::new(db, creator.id)
        .cin(None)
        .ice(Some("001122334455667"))
        .build()
        .await?;

    let result = RequestRepository::new(db).search_by_cin("").await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, with_cin.id);

    Ok(())
}

/// Tests fetching the most recent requests.
///
/// Expected: newest first, limited to the requested count
#[tokio::test]
async fn get_recent_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    RequestFactory::new(db, creator.id)
        .created_at(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let middle = RequestFactory::new(db, creator.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newest = RequestFactory::new(db, creator.id)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let recent = RequestRepository::new(db).get_recent(2).await?;
    let ids: Vec<i32> = recent.into_iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![newest.id, middle.id]);

    Ok(())
}
