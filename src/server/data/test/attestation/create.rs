use super::*;

/// Tests filing an attestation.
///
/// Verifies that the repository stores the applicant fields, the initial status and the
/// creator, resolving the creator's username.
///
/// Expected: Ok with status `déposé` and no deliverer
#[tokio::test]
async fn creates_attestation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let frontdesk = factory::create_user(db).await?;

    let attestation = AttestationRepository::new(db)
        .create(
            CreateAttestationParams {
                if_value: "40012345".to_string(),
                cin: "BE778899".to_string(),
                nom: "El Amrani".to_string(),
                prenom: "Salma".to_string(),
                email: None,
                phone: Some("0661000000".to_string()),
                attestation_type: "depart_definitif".to_string(),
            },
            STATUS_DEPOSE,
            frontdesk.id,
            Utc::now(),
        )
        .await?;

    assert_eq!(attestation.status, STATUS_DEPOSE);
    assert_eq!(attestation.attestation_type, "depart_definitif");
    assert_eq!(attestation.creator_username, Some(frontdesk.username));
    assert!(attestation.delivered_by_id.is_none());

    Ok(())
}
