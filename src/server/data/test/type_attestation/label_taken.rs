use super::*;

/// Tests the label uniqueness check.
///
/// Verifies that a type's own label is not reported as taken when it is excluded, as
/// happens when a type is saved without changing its label.
///
/// Expected: taken for other types, free for itself
#[tokio::test]
async fn excludes_the_type_being_renamed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TypeAttestation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing =
        factory::type_attestation::create_type_attestation_with_label(db, "Attestation TVA")
            .await?;
    let other = factory::create_type_attestation(db).await?;

    let repo = TypeAttestationRepository::new(db);

    assert!(repo.label_taken("Attestation TVA", None).await?);
    assert!(repo.label_taken("Attestation TVA", Some(other.id)).await?);
    assert!(!repo.label_taken("Attestation TVA", Some(existing.id)).await?);
    assert!(!repo.label_taken("Inconnu", None).await?);

    Ok(())
}
