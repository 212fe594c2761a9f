use super::*;

/// Tests a valid token for a user whose role is allowed.
///
/// Expected: Ok(User) matching the token's user
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user_with_role(db, "ROLE_MANAGER").await?)?;
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Role::Processing, Role::Manager])
        .await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.role, Role::Manager);

    Ok(())
}

/// Tests a valid token for a user whose role is not allowed.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user ID
#[tokio::test]
async fn denies_access_to_other_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?)?;
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Role::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an empty role list.
///
/// Expected: Ok(User) for any authenticated user
#[tokio::test]
async fn empty_role_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?)?;
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result.username, user.username);

    Ok(())
}

/// Tests a request without an Authorization header, and one using another scheme.
///
/// Expected: Err(AuthError::MissingToken) both times
#[tokio::test]
async fn rejects_missing_bearer_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let empty = HeaderMap::new();
    let result = AuthGuard::new(db, &tokens, &empty).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    let result = AuthGuard::new(db, &tokens, &basic).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?)?;
    let foreign = TokenService::new("some-other-secret".to_string(), 3600);
    let headers = bearer(&foreign.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?)?;
    let headers = bearer(&tokens.issue(&user)?);
    crate::server::data::user::UserRepository::new(db)
        .delete(user.id)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}
