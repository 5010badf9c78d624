use super::*;

/// Tests finding an existing employee by id.
///
/// Expected: Ok(Some(Employee)) with matching data
#[tokio::test]
async fn finds_existing_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::employee::EmployeeFactory::new(db)
        .name("Ana")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let employee = repo.find_by_id(&created.id).await?.unwrap();

    assert_eq!(employee.id, created.id);
    assert_eq!(employee.name, "Ana");
    assert_eq!(employee.email, created.email);

    Ok(())
}

/// Tests querying for a non-existent employee.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let result = repo.find_by_id("missing").await?;

    assert!(result.is_none());

    Ok(())
}
