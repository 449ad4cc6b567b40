use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::errors::{GroupError, GroupResult, StoreResult};
use crate::model::{Animator, AnimatorDraft, Group, Participant, ParticipantDraft};
use crate::services::validation::ValidationService;
use crate::store::EntityStore;

/// Partial update of a group. `None` leaves the field untouched; a supplied
/// child list replaces the whole reference set.
#[derive(Clone, Debug, Default)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub participants: Option<Vec<ParticipantDraft>>,
    pub animators: Option<Vec<AnimatorDraft>>,
}

impl GroupUpdate {
    pub fn new(
        name: Option<String>,
        participants: Option<Vec<ParticipantDraft>>,
        animators: Option<Vec<AnimatorDraft>>,
    ) -> Self {
        Self {
            name,
            participants,
            animators,
        }
    }
}

/// A deleted group with the children it owned, read before they were removed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovedGroup {
    pub group: Group,
    pub participants: Vec<Participant>,
    pub animators: Vec<Animator>,
}

/// Child documents touched by one unit of work
#[derive(Debug, Default)]
struct ChildIds {
    participant_ids: Vec<String>,
    animator_ids: Vec<String>,
}

impl ChildIds {
    fn is_empty(&self) -> bool {
        self.participant_ids.is_empty() && self.animator_ids.is_empty()
    }
}

/// Creates, edits and deletes groups together with the children they own.
///
/// Every operation that writes more than one document is a unit of work:
/// all writes are awaited before returning, and a failure part-way through is
/// compensated by deleting whatever the operation already wrote.
#[derive(Clone)]
pub struct GroupService {
    store: Arc<dyn EntityStore>,
}

impl GroupService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn all_groups(&self) -> GroupResult<Vec<Group>> {
        Ok(self.store.all_groups().await?)
    }

    pub async fn find_group(&self, id: &str) -> GroupResult<Option<Group>> {
        Ok(self.store.find_group(id).await?)
    }

    /// Create a group and all of its children
    pub async fn add_group(
        &self,
        name: String,
        participants: Vec<ParticipantDraft>,
        animators: Vec<AnimatorDraft>,
    ) -> GroupResult<Group> {
        let name = ValidationService::validate_name("name", name)?;
        let participants: Vec<Participant> = participants
            .into_iter()
            .map(ParticipantDraft::into_record)
            .collect();
        let animators: Vec<Animator> = animators
            .into_iter()
            .map(AnimatorDraft::into_record)
            .collect();
        let group = Group::new(name, &participants, &animators);

        self.store
            .insert_group(&group)
            .await
            .map_err(|e| GroupError::from_group_write(&group.name, e))?;

        let mut written = ChildIds::default();
        if let Err(source) = self
            .write_children(&participants, &animators, &mut written)
            .await
        {
            warn!(
                "Rolling back group {} after a child write failed: {}",
                group.id, source
            );
            self.discard_children(&written).await;
            if let Err(e) = self.store.delete_group(&group.id).await {
                warn!("Failed to remove group {} during rollback: {}", group.id, e);
            }
            return Err(GroupError::CascadeFailed {
                group_id: group.id,
                source,
            });
        }

        info!(
            "Created group {} ('{}') with {} participants and {} animators",
            group.id,
            group.name,
            participants.len(),
            animators.len()
        );
        Ok(group)
    }

    /// Apply a partial update. Returns `None` when the group does not exist.
    pub async fn edit_group(&self, id: &str, update: GroupUpdate) -> GroupResult<Option<Group>> {
        let Some(mut group) = self.store.find_group(id).await? else {
            debug!("editGroup: group {} not found", id);
            return Ok(None);
        };

        if let Some(name) = update.name {
            group.name = ValidationService::validate_name("name", name)?;
        }

        let participants: Option<Vec<Participant>> = update
            .participants
            .map(|drafts| drafts.into_iter().map(ParticipantDraft::into_record).collect());
        let animators: Option<Vec<Animator>> = update
            .animators
            .map(|drafts| drafts.into_iter().map(AnimatorDraft::into_record).collect());

        // New children go in before the group points at them
        let mut written = ChildIds::default();
        if let Err(source) = self
            .write_children(
                participants.as_deref().unwrap_or_default(),
                animators.as_deref().unwrap_or_default(),
                &mut written,
            )
            .await
        {
            self.discard_children(&written).await;
            return Err(GroupError::CascadeFailed {
                group_id: group.id,
                source,
            });
        }

        let mut replaced = ChildIds::default();
        if let Some(participants) = &participants {
            let ids = participants.iter().map(|p| p.id.clone()).collect();
            replaced.participant_ids = std::mem::replace(&mut group.participant_ids, ids);
        }
        if let Some(animators) = &animators {
            let ids = animators.iter().map(|a| a.id.clone()).collect();
            replaced.animator_ids = std::mem::replace(&mut group.animator_ids, ids);
        }

        match self.store.update_group(&group).await {
            Ok(true) => {}
            Ok(false) => {
                debug!("editGroup: group {} disappeared before the update", id);
                self.discard_children(&written).await;
                return Ok(None);
            }
            Err(e) => {
                self.discard_children(&written).await;
                return Err(GroupError::from_group_write(&group.name, e));
            }
        }

        self.discard_children(&replaced).await;

        info!("Updated group {} ('{}')", group.id, group.name);
        Ok(Some(group))
    }

    /// Delete a group and the children it owns. Returns the group and its
    /// children as they were before deletion, or `None` when it did not exist.
    pub async fn delete_group(&self, id: &str) -> GroupResult<Option<RemovedGroup>> {
        let Some(group) = self.store.find_group(id).await? else {
            debug!("deleteGroup: group {} not found", id);
            return Ok(None);
        };

        let participants = self.store.find_participants(&group.participant_ids).await?;
        let animators = self.store.find_animators(&group.animator_ids).await?;

        if !self.store.delete_group(&group.id).await? {
            return Ok(None);
        }

        self.discard_children(&ChildIds {
            participant_ids: group.participant_ids.clone(),
            animator_ids: group.animator_ids.clone(),
        })
        .await;

        info!("Deleted group {} ('{}')", group.id, group.name);
        Ok(Some(RemovedGroup {
            group,
            participants,
            animators,
        }))
    }

    async fn write_children(
        &self,
        participants: &[Participant],
        animators: &[Animator],
        written: &mut ChildIds,
    ) -> StoreResult<()> {
        for participant in participants {
            self.store.insert_participant(participant).await?;
            written.participant_ids.push(participant.id.clone());
        }

        for animator in animators {
            self.store.insert_animator(animator).await?;
            written.animator_ids.push(animator.id.clone());
        }

        Ok(())
    }

    /// Best-effort removal of child documents nothing references any more
    async fn discard_children(&self, children: &ChildIds) {
        if children.is_empty() {
            return;
        }

        if let Err(e) = self
            .store
            .delete_participants(&children.participant_ids)
            .await
        {
            warn!(
                "Failed to delete participants {:?}: {}",
                children.participant_ids, e
            );
        }

        if let Err(e) = self.store.delete_animators(&children.animator_ids).await {
            warn!("Failed to delete animators {:?}: {}", children.animator_ids, e);
        }
    }
}
