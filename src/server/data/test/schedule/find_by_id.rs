use super::*;

/// Tests finding an existing schedule by id.
///
/// Expected: Ok(Some(Schedule)) with matching references and status
#[tokio::test]
async fn finds_existing_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, diarist, created) =
        factory::helpers::create_schedule_with_dependencies(db).await?;

    let repo = ScheduleRepository::new(db);
    let schedule = repo.find_by_id(&created.id).await?.unwrap();

    assert_eq!(schedule.user_id, user.id);
    assert_eq!(schedule.diarist_id, diarist.id);
    assert_eq!(schedule.address_id, address.id);
    assert_eq!(schedule.status, ScheduleStatus::Active);

    Ok(())
}

/// Tests querying for a non-existent schedule.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);

    assert!(repo.find_by_id("missing").await?.is_none());

    Ok(())
}
