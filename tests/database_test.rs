//! Database functionality tests
//!
//! Tests for migrations, store constraints and file-backed persistence

mod common;

use anyhow::Result;
use common::*;
use facilitation::database::connection::establish_connection;
use facilitation::database::entities::*;
use facilitation::database::migrations::Migrator;
use facilitation::errors::StoreError;
use facilitation::model::{Animator, Group, Participant};
use facilitation::store::{EntityStore, SeaOrmStore};
use sea_orm::EntityTrait;
use sea_orm_migration::MigratorTrait;
use tempfile::NamedTempFile;

fn raw_participant(name: &str) -> Participant {
    Participant {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        age: Some(30),
    }
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let db = setup_test_db().await?;

    // Verify all tables exist by attempting to query them
    assert!(groups::Entity::find().all(&db).await?.is_empty());
    assert!(participants::Entity::find().all(&db).await?.is_empty());
    assert!(animators::Entity::find().all(&db).await?.is_empty());

    Migrator::down(&db, None).await?;
    assert!(groups::Entity::find().all(&db).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_store_rejects_short_names() -> Result<()> {
    let store = setup_store().await?;

    let err = store.insert_participant(&raw_participant("A")).await.unwrap_err();
    assert!(matches!(err, StoreError::Constraint { entity: "participant", .. }));

    let animator = Animator {
        id: "a1".to_string(),
        name: String::new(),
        conversations: vec![],
    };
    let err = store.insert_animator(&animator).await.unwrap_err();
    assert!(err.is_constraint_violation());

    let group = Group {
        id: "g1".to_string(),
        name: "G".to_string(),
        participant_ids: vec![],
        animator_ids: vec![],
    };
    let err = store.insert_group(&group).await.unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_FAILED");

    assert_eq!(participant_count(store.db()).await?, 0);
    assert_eq!(animator_count(store.db()).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_store_enforces_unique_group_names() -> Result<()> {
    let store = setup_store().await?;

    let first = Group::new("G1".to_string(), &[], &[]);
    let second = Group::new("G1".to_string(), &[], &[]);

    store.insert_group(&first).await?;
    let err = store.insert_group(&second).await.unwrap_err();

    assert!(matches!(err, StoreError::Duplicate { entity: "group", .. }));
    assert_eq!(store.all_groups().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_store_round_trips_lists_in_order() -> Result<()> {
    let store = setup_store().await?;

    let animator = Animator {
        id: "a1".to_string(),
        name: "Bo".to_string(),
        conversations: vec!["c".to_string(), "a".to_string(), "b".to_string()],
    };
    store.insert_animator(&animator).await?;

    let found = store.find_animator("a1").await?.unwrap();
    assert_eq!(found, animator);

    let mut updated = found.clone();
    updated.conversations.remove(0);
    assert!(store.update_animator(&updated).await?);
    assert_eq!(store.find_animator("a1").await?.unwrap(), updated);

    updated.id = "missing".to_string();
    assert!(!store.update_animator(&updated).await?);

    Ok(())
}

#[tokio::test]
async fn test_batch_lookup_skips_unknown_ids() -> Result<()> {
    let store = setup_store().await?;

    let ann = raw_participant("Ann");
    store.insert_participant(&ann).await?;

    let found = store
        .find_participants(&[ann.id.clone(), "missing".to_string()])
        .await?;
    assert_eq!(found, vec![ann]);
    assert!(store.find_participants(&[]).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_file_database_persists_across_connections() -> Result<()> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let group = Group::new("Persistent".to_string(), &[], &[]);
    {
        let db = establish_connection(&db_url).await?;
        Migrator::up(&db, None).await?;
        SeaOrmStore::new(db.clone()).insert_group(&group).await?;
        db.close().await?;
    }

    let db = establish_connection(&db_url).await?;
    Migrator::up(&db, None).await?;
    let store = SeaOrmStore::new(db);

    assert_eq!(store.find_group(&group.id).await?, Some(group));

    Ok(())
}
