use crate::server::{
    error::AppError,
    model::{
        attestation::{CreateAttestationParams, STATUS_DEPOSE, STATUS_LIVRE},
        user::User,
    },
    service::attestation::AttestationService,
};
use test_utils::{builder::TestBuilder, factory};

fn params() -> CreateAttestationParams {
    CreateAttestationParams {
        if_value: "22334455".to_string(),
        cin: "EE102030".to_string(),
        nom: "Benali".to_string(),
        prenom: "Karim".to_string(),
        email: None,
        phone: Some("0612345678".to_string()),
        attestation_type: "depart_definitif".to_string(),
    }
}

/// Tests filing an attestation.
///
/// Expected: Ok with status déposé and the creator recorded
#[tokio::test]
async fn create_files_as_deposited() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = User::from_entity(factory::create_user(db).await?)?;

    let attestation = AttestationService::new(db).create(params(), &creator).await?;

    assert_eq!(attestation.status, STATUS_DEPOSE);
    assert_eq!(attestation.creator_id, Some(creator.id));
    assert!(attestation.delivered_by_id.is_none());

    Ok(())
}

/// Tests delivering an attestation twice.
///
/// Verifies that a second deliverer neither succeeds nor replaces the first.
///
/// Expected: first delivery records the deliverer, second is Err(BadRequest)
#[tokio::test]
async fn deliver_only_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let deliverer = User::from_entity(factory::create_user(db).await?)?;
    let latecomer = User::from_entity(factory::create_user(db).await?)?;
    let attestation = factory::create_attestation(db, creator.id).await?;
    let service = AttestationService::new(db);

    let delivered = service.deliver(attestation.id, &deliverer).await?.unwrap();
    assert_eq!(delivered.status, STATUS_LIVRE);
    assert_eq!(delivered.delivered_by_id, Some(deliverer.id));

    match service.deliver(attestation.id, &latecomer).await {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "L'attestation a déjà été livrée"),
        other => panic!("expected BadRequest, got {other:?}"),
    }

    let stored = service.get_by_id(attestation.id).await?.unwrap();
    assert_eq!(stored.delivered_by_id, Some(deliverer.id));

    assert!(service.deliver(999, &deliverer).await?.is_none());

    Ok(())
}

/// Tests exporting attestations as a workbook.
///
/// Expected: bytes of a zip container
#[tokio::test]
async fn export_workbook_produces_xlsx() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    factory::create_attestation(db, creator.id).await?;

    let bytes = AttestationService::new(db).export_workbook().await?;

    assert!(bytes.starts_with(b"PK"));

    Ok(())
}
