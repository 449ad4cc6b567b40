use std::sync::Arc;
use tracing::debug;

use crate::errors::{ConversationError, ConversationResult, StoreResult};
use crate::model::Animator;
use crate::store::EntityStore;

/// Resolve a client-supplied position against a list of `length` entries
pub fn checked_index(index: i32, length: usize) -> ConversationResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|position| *position < length)
        .ok_or(ConversationError::OutOfRange {
            index: i64::from(index),
            length,
        })
}

/// Owns animator lookups and conversation list edits
#[derive(Clone)]
pub struct AnimatorService {
    store: Arc<dyn EntityStore>,
}

impl AnimatorService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Batch fetch the animators a group references, in store order
    pub async fn animators_for(&self, ids: &[String]) -> StoreResult<Vec<Animator>> {
        self.store.find_animators(ids).await
    }

    pub async fn find_animator(&self, id: &str) -> StoreResult<Option<Animator>> {
        self.store.find_animator(id).await
    }

    /// Append a conversation summary
    pub async fn add_conversation(
        &self,
        animator_id: &str,
        summary: String,
    ) -> ConversationResult<Option<Animator>> {
        self.modify_conversations(animator_id, move |conversations| {
            conversations.push(summary);
            Ok(())
        })
        .await
    }

    /// Replace the summary at `index`
    pub async fn edit_conversation(
        &self,
        animator_id: &str,
        summary: String,
        index: i32,
    ) -> ConversationResult<Option<Animator>> {
        self.modify_conversations(animator_id, move |conversations| {
            let position = checked_index(index, conversations.len())?;
            conversations[position] = summary;
            Ok(())
        })
        .await
    }

    /// Remove the summary at `index`, shifting later entries down
    pub async fn delete_conversation(
        &self,
        animator_id: &str,
        index: i32,
    ) -> ConversationResult<Option<Animator>> {
        self.modify_conversations(animator_id, move |conversations| {
            let position = checked_index(index, conversations.len())?;
            conversations.remove(position);
            Ok(())
        })
        .await
    }

    async fn modify_conversations<F>(
        &self,
        animator_id: &str,
        edit: F,
    ) -> ConversationResult<Option<Animator>>
    where
        F: FnOnce(&mut Vec<String>) -> ConversationResult<()> + Send,
    {
        let Some(mut animator) = self.store.find_animator(animator_id).await? else {
            debug!("Animator {} not found", animator_id);
            return Ok(None);
        };

        edit(&mut animator.conversations)?;

        if !self.store.update_animator(&animator).await? {
            debug!("Animator {} disappeared before the update", animator_id);
            return Ok(None);
        }

        debug!(
            "Animator {} now has {} conversations",
            animator.id,
            animator.conversations.len()
        );
        Ok(Some(animator))
    }
}
