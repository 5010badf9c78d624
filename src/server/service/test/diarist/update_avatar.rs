use super::*;

/// Tests storing an avatar locally.
///
/// Verifies the file lands in the avatar folder and the returned URL, which is also
/// persisted on the diarist, points at the static file route.
///
/// Expected: Ok(String) with `<public_url>/files/avatar/<filename>`
#[tokio::test]
async fn stores_locally_and_persists_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Diarist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = AvatarStorage::Local {
        upload_dir: dir.path().to_path_buf(),
    };
    let public_url = public_url();

    let diarist = factory::diarist::create_diarist(db).await?;

    let service = DiaristService::new(db, &storage, &public_url);
    let avatar = service.update_avatar(&diarist.id, png_upload()).await?;

    let filename = avatar
        .strip_prefix("http://localhost:3333/files/avatar/")
        .unwrap();
    assert!(filename.ends_with(".png"));
    assert!(dir.path().join(AVATAR_FOLDER).join(filename).exists());

    let stored = DiaristRepository::new(db)
        .find_by_id(&diarist.id)
        .await?
        .unwrap();
    assert_eq!(stored.avatar, Some(avatar));

    Ok(())
}

/// Tests uploading for a diarist that does not exist.
///
/// Verifies nothing is written to storage.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_diarist_without_storing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Diarist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = AvatarStorage::Local {
        upload_dir: dir.path().to_path_buf(),
    };
    let public_url = public_url();

    let service = DiaristService::new(db, &storage, &public_url);
    let result = service.update_avatar("missing", png_upload()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(!dir.path().join(AVATAR_FOLDER).exists());

    Ok(())
}

/// Tests that non-image and empty uploads are rejected.
///
/// Expected: Err(AppError::BadRequest) and avatar unchanged
#[tokio::test]
async fn rejects_non_image_and_empty_uploads() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Diarist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = AvatarStorage::Local {
        upload_dir: dir.path().to_path_buf(),
    };
    let public_url = public_url();

    let diarist = factory::diarist::create_diarist(db).await?;
    let service = DiaristService::new(db, &storage, &public_url);

    let text = AvatarUpload {
        original_filename: Some("notes.txt".to_string()),
        content_type: Some("text/plain".to_string()),
        bytes: Bytes::from_static(b"hello"),
    };
    let empty = AvatarUpload {
        bytes: Bytes::new(),
        ..png_upload()
    };

    for upload in [text, empty] {
        let result = service.update_avatar(&diarist.id, upload).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let stored = DiaristRepository::new(db)
        .find_by_id(&diarist.id)
        .await?
        .unwrap();
    assert!(stored.avatar.is_none());

    Ok(())
}
