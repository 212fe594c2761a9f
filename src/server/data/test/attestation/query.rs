use super::*;

/// Tests listing attestations by creator and by type.
///
/// Expected: each query returns only matching attestations
#[tokio::test]
async fn filters_by_creator_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;
    let colleague = factory::create_user(db).await?;

    let mine = AttestationFactory::new(db, frontdesk.id)
        .attestation_type("renseignement_deces")
        .build()
        .await?;
    factory::create_attestation(db, colleague.id).await?;

    let repo = AttestationRepository::new(db);

    let by_creator = repo.get_by_creator(frontdesk.id).await?;
    assert_eq!(by_creator.len(), 1);
    assert_eq!(by_creator[0].id, mine.id);

    let by_type = repo.get_by_type("renseignement_deces").await?;
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].id, mine.id);

    assert_eq!(repo.get_all().await?.len(), 2);
    assert_eq!(repo.get_recent(1).await?.len(), 1);

    Ok(())
}

/// Tests substring search on nom and CIN.
///
/// Expected: case-insensitive hits on the matching attestation only
#[tokio::test]
async fn searches_nom_and_cin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;
    let target = AttestationFactory::new(db, frontdesk.id)
        .nom("Berrada")
        .cin("QA112233")
        .build()
        .await?;
    AttestationFactory::new(db, frontdesk.id)
        .nom("Tazi")
        .cin("ZZ000111")
        .build()
        .await?;

    let repo = AttestationRepository::new(db);

    let by_nom = repo.search_by_nom("BERR").await?;
    assert_eq!(by_nom.len(), 1);
    assert_eq!(by_nom[0].id, target.id);

    let by_cin = repo.search_by_cin("qa11").await?;
    assert_eq!(by_cin.len(), 1);
    assert_eq!(by_cin[0].id, target.id);

    Ok(())
}

/// Tests nom search on a name starting with an accented capital.
///
/// Expected: the lowercase accented query finds the attestation
#[tokio::test]
async fn searches_accented_nom() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;
    let target = AttestationFactory::new(db, frontdesk.id)
        .nom("Élodie")
        .build()
        .await?;
    AttestationFactory::new(db, frontdesk.id)
        .nom("Elouardi")
        .build()
        .await?;

    let result = AttestationRepository::new(db)
        .search_by_nom("élodie")
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, target.id);

    Ok(())
}
