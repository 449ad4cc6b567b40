#![allow(dead_code)]

use anyhow::Result;
use facilitation::database::connection::establish_connection;
use facilitation::database::migrations::Migrator;
use facilitation::model::{AnimatorDraft, ParticipantDraft};
use facilitation::store::SeaOrmStore;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use sea_orm_migration::MigratorTrait;

use facilitation::database::entities::{animators, participants};

/// In-memory database with the schema applied
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = establish_connection("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn setup_store() -> Result<SeaOrmStore> {
    Ok(SeaOrmStore::new(setup_test_db().await?))
}

pub fn participant(name: &str, age: i32) -> ParticipantDraft {
    ParticipantDraft::new(name, Some(age)).unwrap()
}

pub fn animator(name: &str, conversations: &[&str]) -> AnimatorDraft {
    AnimatorDraft::new(
        name,
        conversations.iter().map(|c| c.to_string()).collect(),
    )
    .unwrap()
}

pub async fn participant_count(db: &DatabaseConnection) -> Result<u64> {
    Ok(participants::Entity::find().count(db).await?)
}

pub async fn animator_count(db: &DatabaseConnection) -> Result<u64> {
    Ok(animators::Entity::find().count(db).await?)
}
