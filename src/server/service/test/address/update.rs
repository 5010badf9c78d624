use super::*;
use test_utils::factory::helpers::next_string_id;

/// Tests updating one of the user's own addresses.
///
/// Expected: Ok(UserAddress) with the new values persisted
#[tokio::test]
async fn updates_owned_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let address = factory::user_address::create_address(db, &user.id).await?;

    let service = AddressService::new(db);
    let updated = service
        .update(
            &user.id,
            &address.id,
            UpdateUserAddressParam {
                number: Some("42B".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.number, "42B");
    assert_eq!(service.get(&user.id, &address.id).await?.number, "42B");

    Ok(())
}

/// Tests that an address of another user cannot be updated.
///
/// Verifies the address is left untouched.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_address_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other_user = factory::user::create_user(db).await?;
    let foreign_address = factory::user_address::create_address(db, &other_user.id).await?;

    let service = AddressService::new(db);
    let result = service
        .update(
            &user.id,
            &foreign_address.id,
            UpdateUserAddressParam {
                title: Some("Mine now".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let unchanged = service.get(&other_user.id, &foreign_address.id).await?;
    assert_eq!(unchanged.title, foreign_address.title);

    Ok(())
}

/// Tests updating for a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AddressService::new(db);
    let result = service
        .update(
            &next_string_id("user"),
            "missing",
            UpdateUserAddressParam {
                rooms: Some(1),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that invalid values are rejected without writing.
///
/// Expected: Err(AppError::BadRequest) and address unchanged
#[tokio::test]
async fn rejects_invalid_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let address = factory::user_address::create_address(db, &user.id).await?;

    let service = AddressService::new(db);
    let result = service
        .update(
            &user.id,
            &address.id,
            UpdateUserAddressParam {
                title: Some("Renamed".to_string()),
                square_meters: Some(-10),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(&user.id, &address.id).await?.title, address.title);

    Ok(())
}

/// Tests that an update without fields returns the current address.
///
/// Expected: Ok(UserAddress) equal to the stored address
#[tokio::test]
async fn empty_update_returns_current_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let address = factory::user_address::create_address(db, &user.id).await?;

    let service = AddressService::new(db);
    let before = service.get(&user.id, &address.id).await?;
    let after = service
        .update(&user.id, &address.id, UpdateUserAddressParam::default())
        .await?;

    assert_eq!(before, after);

    Ok(())
}
