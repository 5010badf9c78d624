use super::*;

/// Tests authenticating a user with a valid token.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn resolves_user_from_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let header = format!("Bearer {}", tokens.sign(&user.id, User::AUDIENCE)?);

    let guard = AuthGuard::new(db, &tokens);
    let principal: User = guard.require(Some(&header)).await?;

    assert_eq!(principal.id, user.id);
    assert_eq!(principal.email, user.email);

    Ok(())
}

/// Tests authenticating employees and diarists with tokens for their kind.
///
/// Expected: Ok for each principal kind
#[tokio::test]
async fn resolves_each_principal_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .with_table(entity::prelude::Diarist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let employee = factory::employee::create_employee(db).await?;
    let diarist = factory::diarist::create_diarist(db).await?;

    let guard = AuthGuard::new(db, &tokens);

    let token = tokens.sign(&employee.id, Employee::AUDIENCE)?;
    let resolved: Employee = guard.require_token(&token).await?;
    assert_eq!(resolved.id, employee.id);

    let token = tokens.sign(&diarist.id, Diarist::AUDIENCE)?;
    let resolved: Diarist = guard.require_token(&token).await?;
    assert_eq!(resolved.id, diarist.id);

    Ok(())
}

/// Tests that a missing header fails.
///
/// Expected: Err(AuthError::MissingAuthorizationHeader)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require::<User>(None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingAuthorizationHeader))
    ));

    Ok(())
}

/// Tests that a token signed with another secret fails.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let foreign = SessionTokenService::new(b"some-other-secret", 3600);
    let header = format!("Bearer {}", foreign.sign(&user.id, User::AUDIENCE)?);

    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require::<User>(Some(&header)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a token issued for one principal kind cannot authenticate another.
///
/// Verifies that a diarist token whose subject collides with a user id is rejected
/// on a user route.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_token_for_other_principal_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Diarist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    factory::user::UserFactory::new(db).id("shared-id").build().await?;
    factory::diarist::DiaristFactory::new(db)
        .id("shared-id")
        .build()
        .await?;

    let token = tokens.sign("shared-id", Diarist::AUDIENCE)?;

    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require_token::<User>(&token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a valid token for a deleted or unknown principal fails.
///
/// Expected: Err(AuthError::PrincipalNotFound)
#[tokio::test]
async fn fails_when_subject_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let header = format!("Bearer {}", tokens.sign("ghost", User::AUDIENCE)?);

    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require::<User>(Some(&header)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PrincipalNotFound { kind: "user", id })) if id == "ghost"
    ));

    Ok(())
}

/// Tests that a non-bearer scheme fails even when the token itself is valid.
///
/// Expected: Err(AuthError::InvalidScheme)
#[tokio::test]
async fn fails_with_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let header = format!("Token {}", tokens.sign(&user.id, User::AUDIENCE)?);

    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require::<User>(Some(&header)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidScheme(_)))
    ));

    Ok(())
}
