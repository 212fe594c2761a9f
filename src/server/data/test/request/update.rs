use super::*;

/// Tests overwriting the basic fields of a request.
///
/// Expected: Ok(Some) with the new name and identifiers
#[tokio::test]
async fn overwrites_basic_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let request = factory::create_request(db, creator.id).await?;

    let params = RequestFieldsParams {
        cin: None,
        ice: Some("002233445000011".to_string()),
        pm_pp: Some("PM".to_string()),
        ..fields("Atlas Négoce SARL")
    };

    let updated = RequestRepository::new(db)
        .update_fields(request.id, params)
        .await?
        .unwrap();

    assert_eq!(updated.raison_sociale_noms_prenom, "Atlas Négoce SARL");
    assert_eq!(updated.cin, None);
    assert_eq!(updated.ice.as_deref(), Some("002233445000011"));
    assert_eq!(updated.pm_pp.as_deref(), Some("PM"));
    assert_eq!(updated.etat, request.etat);

    Ok(())
}

/// Tests the processing update.
///
/// Verifies that processing fields are written, the agent is recorded, and absent basic
/// fields keep their stored values.
///
/// Expected: Ok(Some) with agent set and original CIN kept
#[tokio::test]
async fn processing_update_assigns_agent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let agent = factory::create_user_with_role(db, "ROLE_PROCESSING").await?;
    let request = factory::create_request(db, creator.id).await?;

    let params = ProcessRequestParams {
        etat: Some("VALIDE".to_string()),
        secteur: Some("Commerce".to_string()),
        tp: Some("TP-5521".to_string()),
        ..Default::default()
    };
    let day = Utc::now().date_naive();

    let updated = RequestRepository::new(db)
        .update_processing(request.id, params, day, agent.id)
        .await?
        .unwrap();

    assert_eq!(updated.etat.as_deref(), Some("VALIDE"));
    assert_eq!(updated.secteur.as_deref(), Some("Commerce"));
    assert_eq!(updated.date_traitement, Some(day));
    assert_eq!(updated.agent_id, Some(agent.id));
    assert_eq!(updated.agent_username, Some(agent.username));
    assert_eq!(updated.cin, request.cin);

    Ok(())
}

/// Tests the processing update on a missing request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn processing_update_returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_user(db).await?;

    let result = RequestRepository::new(db)
        .update_processing(12, ProcessRequestParams::default(), Utc::now().date_naive(), agent.id)
        .await?;

    assert!(result.is_none());

    Ok(())
}
