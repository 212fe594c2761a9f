use super::*;

/// Tests creating, renaming and deleting a type.
///
/// Expected: each step succeeds and the type is gone at the end
#[tokio::test]
async fn creates_renames_and_deletes_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TypeAttestation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TypeAttestationRepository::new(db);
    let created = repo.create(params("Attestation de Revenu Globale")).await?;

    let renamed = repo
        .update(created.id, params("Attestation de Revenu"))
        .await?
        .unwrap();
    assert_eq!(renamed.label, "Attestation de Revenu");
    assert_eq!(renamed.created_at, created.created_at);

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests listing and searching types.
///
/// Expected: all types ordered by label; search ignores case
#[tokio::test]
async fn lists_and_searches_types() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TypeAttestation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::type_attestation::create_type_attestation_with_label(db, "Départ Définitif").await?;
    factory::type_attestation::create_type_attestation_with_label(db, "Attestation TVA").await?;

    let repo = TypeAttestationRepository::new(db);

    let labels: Vec<String> = repo.get_all().await?.into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["Attestation TVA", "Départ Définitif"]);

    let hits = repo.search_by_label("tva").await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].label, "Attestation TVA");

    Ok(())
}

/// Tests renaming a type that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TypeAttestation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TypeAttestationRepository::new(db)
        .update(3, params("Nouveau libellé"))
        .await?;

    assert!(result.is_none());

    Ok(())
}
