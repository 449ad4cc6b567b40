use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use tracing::debug;

use super::EntityStore;
use crate::common::db_errors::format_db_error;
use crate::database::entities::{animators, groups, participants};
use crate::errors::{StoreError, StoreResult};
use crate::model::{Animator, Group, Participant};

/// `EntityStore` backed by a sea-orm connection pool
#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn write_error(entity: &'static str, operation: &str, err: DbErr) -> StoreError {
    let (kind, message) = format_db_error(operation, &err);
    debug!(?kind, "{}", message);
    StoreError::from_db_err(entity, err)
}

fn encode_list(values: &[String]) -> StoreResult<String> {
    Ok(serde_json::to_string(values)?)
}

fn decode_list(raw: &str) -> StoreResult<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

impl TryFrom<groups::Model> for Group {
    type Error = StoreError;

    fn try_from(model: groups::Model) -> StoreResult<Self> {
        Ok(Self {
            participant_ids: decode_list(&model.participant_ids)?,
            animator_ids: decode_list(&model.animator_ids)?,
            id: model.id,
            name: model.name,
        })
    }
}

impl TryFrom<animators::Model> for Animator {
    type Error = StoreError;

    fn try_from(model: animators::Model) -> StoreResult<Self> {
        Ok(Self {
            conversations: decode_list(&model.conversations)?,
            id: model.id,
            name: model.name,
        })
    }
}

impl From<participants::Model> for Participant {
    fn from(model: participants::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
        }
    }
}

fn group_active_model(group: &Group) -> StoreResult<groups::ActiveModel> {
    Ok(groups::ActiveModel {
        id: Set(group.id.clone()),
        name: Set(group.name.clone()),
        participant_ids: Set(encode_list(&group.participant_ids)?),
        animator_ids: Set(encode_list(&group.animator_ids)?),
    })
}

fn animator_active_model(animator: &Animator) -> StoreResult<animators::ActiveModel> {
    Ok(animators::ActiveModel {
        id: Set(animator.id.clone()),
        name: Set(animator.name.clone()),
        conversations: Set(encode_list(&animator.conversations)?),
    })
}

#[async_trait]
impl EntityStore for SeaOrmStore {
    async fn all_groups(&self) -> StoreResult<Vec<Group>> {
        groups::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Group::try_from)
            .collect()
    }

    async fn find_group(&self, id: &str) -> StoreResult<Option<Group>> {
        groups::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .map(Group::try_from)
            .transpose()
    }

    async fn insert_group(&self, group: &Group) -> StoreResult<()> {
        groups::Entity::insert(group_active_model(group)?)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| write_error("group", "insert group", e))?;
        Ok(())
    }

    async fn update_group(&self, group: &Group) -> StoreResult<bool> {
        let result = groups::Entity::update_many()
            .set(group_active_model(group)?)
            .filter(groups::Column::Id.eq(group.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| write_error("group", "update group", e))?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_group(&self, id: &str) -> StoreResult<bool> {
        let result = groups::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_participants(&self, ids: &[String]) -> StoreResult<Vec<Participant>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let participants = participants::Entity::find()
            .filter(participants::Column::Id.is_in(ids.iter().cloned()))
            .all(&self.db)
            .await?;

        Ok(participants.into_iter().map(Participant::from).collect())
    }

    async fn insert_participant(&self, participant: &Participant) -> StoreResult<()> {
        let model = participants::ActiveModel {
            id: Set(participant.id.clone()),
            name: Set(participant.name.clone()),
            age: Set(participant.age),
        };

        participants::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| write_error("participant", "insert participant", e))?;
        Ok(())
    }

    async fn delete_participants(&self, ids: &[String]) -> StoreResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = participants::Entity::delete_many()
            .filter(participants::Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn find_animator(&self, id: &str) -> StoreResult<Option<Animator>> {
        animators::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .map(Animator::try_from)
            .transpose()
    }

    async fn find_animators(&self, ids: &[String]) -> StoreResult<Vec<Animator>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        animators::Entity::find()
            .filter(animators::Column::Id.is_in(ids.iter().cloned()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(Animator::try_from)
            .collect()
    }

    async fn insert_animator(&self, animator: &Animator) -> StoreResult<()> {
        animators::Entity::insert(animator_active_model(animator)?)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| write_error("animator", "insert animator", e))?;
        Ok(())
    }

    async fn update_animator(&self, animator: &Animator) -> StoreResult<bool> {
        let result = animators::Entity::update_many()
            .set(animator_active_model(animator)?)
            .filter(animators::Column::Id.eq(animator.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| write_error("animator", "update animator", e))?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_animators(&self, ids: &[String]) -> StoreResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = animators::Entity::delete_many()
            .filter(animators::Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_model_decodes_reference_lists() {
        let model = groups::Model {
            id: "g1".to_string(),
            name: "Circle".to_string(),
            participant_ids: r#"["p1","p2"]"#.to_string(),
            animator_ids: "[]".to_string(),
        };

        let group = Group::try_from(model).unwrap();
        assert_eq!(group.participant_ids, vec!["p1", "p2"]);
        assert!(group.animator_ids.is_empty());
    }

    #[test]
    fn test_corrupt_list_is_a_serialization_error() {
        let model = animators::Model {
            id: "a1".to_string(),
            name: "Bo".to_string(),
            conversations: "not json".to_string(),
        };

        assert!(matches!(
            Animator::try_from(model),
            Err(StoreError::Serialization(_))
        ));
    }
}
