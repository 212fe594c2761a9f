use super::*;

/// Tests creating a request.
///
/// Verifies that the repository stores the basic fields, initial state and creator, and
/// resolves the creator's username.
///
/// Expected: Ok with etat `NOUVEAU` and no agent
#[tokio::test]
async fn creates_request_with_creator_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let request = RequestRepository::new(db)
        .create(fields("Benali Karim"), ETAT_NOUVEAU, creator.id, Utc::now())
        .await?;

    assert_eq!(request.raison_sociale_noms_prenom, "Benali Karim");
    assert_eq!(request.etat.as_deref(), Some(ETAT_NOUVEAU));
    assert_eq!(request.creator_id, creator.id);
    assert_eq!(request.creator_username, Some(creator.username));
    assert!(request.agent_id.is_none());
    assert!(request.agent_username.is_none());

    Ok(())
}

/// Tests finding a request that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(RequestRepository::new(db).find_by_id(77).await?.is_none());

    Ok(())
}

/// Tests deleting a request.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let request = factory::create_request(db, creator.id).await?;

    let repo = RequestRepository::new(db);
    assert!(repo.delete(request.id).await?);
    assert!(!repo.delete(request.id).await?);

    Ok(())
}
