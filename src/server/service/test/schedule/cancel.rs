use super::*;

/// Tests canceling an active schedule.
///
/// Verifies the status is persisted and the cancellation is published to the payment
/// topic with the schedule id.
///
/// Expected: Ok(Schedule) with status canceled
#[tokio::test]
async fn cancels_active_schedule_and_publishes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let connections = ConnectionRegistry::new();
    let producer = RecordingProducer::default();

    let (user, _, _, schedule) = factory::helpers::create_schedule_with_dependencies(db).await?;

    let service = ScheduleService::new(db, &connections, &producer);
    let canceled = service.cancel(cancel_param(&schedule.id, &user.id)).await?;

    assert_eq!(canceled.status, ScheduleStatus::Canceled);
    let stored = ScheduleRepository::new(db)
        .find_by_id(&schedule.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ScheduleStatus::Canceled);

    let sent = producer.sent.lock().unwrap();
    assert_eq!(
        *sent,
        vec![(
            "payment.schedule-canceled".to_string(),
            json!({ "scheduleId": schedule.id })
        )]
    );

    Ok(())
}

/// Tests that a connected diarist receives the cancellation event.
///
/// Expected: One `schedule:canceled` frame carrying schedule, diarist and user
#[tokio::test]
async fn notifies_connected_diarist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let connections = ConnectionRegistry::new();
    let producer = RecordingProducer::default();

    let (user, _, diarist, schedule) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let (_handle, mut receiver) = connections.register(&diarist.id).await;

    let service = ScheduleService::new(db, &connections, &producer);
    service.cancel(cancel_param(&schedule.id, &user.id)).await?;

    let frame: serde_json::Value = serde_json::from_str(&receiver.recv().await.unwrap()).unwrap();
    assert_eq!(frame["event"], "schedule:canceled");
    assert_eq!(frame["data"]["schedule"]["id"], schedule.id);
    assert_eq!(frame["data"]["schedule"]["status"], "canceled");
    assert_eq!(frame["data"]["diarist"]["id"], diarist.id);
    assert_eq!(frame["data"]["user"]["id"], user.id);

    Ok(())
}

/// Tests that a failing broker does not fail or roll back the cancellation.
///
/// Expected: Ok(Schedule) and status canceled
#[tokio::test]
async fn publish_failure_keeps_cancellation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let connections = ConnectionRegistry::new();

    let (user, _, _, schedule) = factory::helpers::create_schedule_with_dependencies(db).await?;

    let service = ScheduleService::new(db, &connections, &FailingProducer);
    let result = service.cancel(cancel_param(&schedule.id, &user.id)).await;

    assert!(result.is_ok());
    let stored = ScheduleRepository::new(db)
        .find_by_id(&schedule.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ScheduleStatus::Canceled);

    Ok(())
}

/// Tests canceling a schedule that does not exist.
///
/// Expected: Err(ScheduleError::NotFound) and nothing published
#[tokio::test]
async fn fails_for_missing_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let connections = ConnectionRegistry::new();
    let producer = RecordingProducer::default();

    let user = factory::user::create_user(db).await?;

    let service = ScheduleService::new(db, &connections, &producer);
    let result = service.cancel(cancel_param("missing", &user.id)).await;

    assert!(matches!(
        result,
        Err(AppError::ScheduleErr(ScheduleError::NotFound(_)))
    ));
    assert!(producer.sent.lock().unwrap().is_empty());

    Ok(())
}

/// Tests that a user cannot cancel a schedule booked by someone else.
///
/// Expected: Err(ScheduleError::NotFound) and status unchanged
#[tokio::test]
async fn fails_for_schedule_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let connections = ConnectionRegistry::new();
    let producer = RecordingProducer::default();

    let (_, _, _, schedule) = factory::helpers::create_schedule_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let service = ScheduleService::new(db, &connections, &producer);
    let result = service.cancel(cancel_param(&schedule.id, &intruder.id)).await;

    assert!(matches!(
        result,
        Err(AppError::ScheduleErr(ScheduleError::NotFound(_)))
    ));
    let stored = ScheduleRepository::new(db)
        .find_by_id(&schedule.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ScheduleStatus::Active);

    Ok(())
}

/// Tests that only active schedules can be canceled.
///
/// Verifies working, canceled and done schedules each fail with their own error and keep
/// their status.
///
/// Expected: Err(ScheduleError::Working | Canceled | Done)
#[tokio::test]
async fn refuses_non_active_statuses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let connections = ConnectionRegistry::new();
    let producer = RecordingProducer::default();

    let user = factory::user::create_user(db).await?;
    let address = factory::user_address::create_address(db, &user.id).await?;
    let diarist = factory::diarist::create_diarist(db).await?;

    let service = ScheduleService::new(db, &connections, &producer);

    for status in [
        ScheduleStatus::Working,
        ScheduleStatus::Canceled,
        ScheduleStatus::Done,
    ] {
        let schedule =
            factory::schedule::ScheduleFactory::new(db, &user.id, &diarist.id, &address.id)
                .status(status)
                .build()
                .await?;

        let result = service.cancel(cancel_param(&schedule.id, &user.id)).await;

        match (&status, result) {
            (ScheduleStatus::Working, Err(AppError::ScheduleErr(ScheduleError::Working(_))))
            | (ScheduleStatus::Canceled, Err(AppError::ScheduleErr(ScheduleError::Canceled(_))))
            | (ScheduleStatus::Done, Err(AppError::ScheduleErr(ScheduleError::Done(_)))) => {}
            (status, result) => panic!("Unexpected result for {:?}: {:?}", status, result),
        }

        let stored = ScheduleRepository::new(db)
            .find_by_id(&schedule.id)
            .await?
            .unwrap();
        assert_eq!(stored.status, status);
    }

    assert!(producer.sent.lock().unwrap().is_empty());

    Ok(())
}

/// Tests two simultaneous cancellations of the same schedule.
///
/// Verifies only one request wins the status change and the payment topic receives a single
/// message.
///
/// Expected: One Ok(Schedule) and one Err(ScheduleError::Canceled)
#[tokio::test]
async fn concurrent_cancellations_succeed_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let connections = ConnectionRegistry::new();
    let producer = RecordingProducer::default();

    let (user, _, _, schedule) = factory::helpers::create_schedule_with_dependencies(db).await?;

    let service = ScheduleService::new(db, &connections, &producer);
    let (first, second) = tokio::join!(
        service.cancel(cancel_param(&schedule.id, &user.id)),
        service.cancel(cancel_param(&schedule.id, &user.id)),
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().any(|result| matches!(
        result,
        Err(AppError::ScheduleErr(ScheduleError::Canceled(_)))
    )));
    assert_eq!(producer.sent.lock().unwrap().len(), 1);

    Ok(())
}
