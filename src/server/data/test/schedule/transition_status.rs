use super::*;

/// Tests moving an active schedule to canceled.
///
/// Expected: Ok(true) with status persisted as canceled
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, created) = factory::helpers::create_schedule_with_dependencies(db).await?;

    let repo = ScheduleRepository::new(db);
    let updated = repo
        .transition_status(&created.id, ScheduleStatus::Active, ScheduleStatus::Canceled)
        .await?;

    assert!(updated);
    let schedule = repo.find_by_id(&created.id).await?.unwrap();
    assert_eq!(schedule.status, ScheduleStatus::Canceled);

    Ok(())
}

/// Tests that a schedule not holding the expected status is left alone.
///
/// Expected: Ok(false) with status unchanged
#[tokio::test]
async fn skips_schedule_in_other_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, created) = factory::helpers::create_schedule_with_dependencies(db).await?;

    let repo = ScheduleRepository::new(db);
    repo.transition_status(&created.id, ScheduleStatus::Active, ScheduleStatus::Working)
        .await?;
    let updated = repo
        .transition_status(&created.id, ScheduleStatus::Active, ScheduleStatus::Canceled)
        .await?;

    assert!(!updated);
    let schedule = repo.find_by_id(&created.id).await?.unwrap();
    assert_eq!(schedule.status, ScheduleStatus::Working);

    Ok(())
}

/// Tests that only the targeted schedule changes.
///
/// Expected: Ok with the sibling schedule still active
#[tokio::test]
async fn leaves_other_schedules_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, diarist, target) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let sibling =
        factory::schedule::create_schedule(db, &user.id, &diarist.id, &address.id).await?;

    let repo = ScheduleRepository::new(db);
    repo.transition_status(&target.id, ScheduleStatus::Active, ScheduleStatus::Canceled)
        .await?;

    let sibling = repo.find_by_id(&sibling.id).await?.unwrap();
    assert_eq!(sibling.status, ScheduleStatus::Active);

    Ok(())
}
