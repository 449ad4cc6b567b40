use async_graphql::*;
use serde_json::json;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{into_drafts, AnimatorInput, Group, ParticipantInput};
use crate::services::GroupUpdate;

#[derive(Default)]
pub struct GroupMutation;

#[Object]
impl GroupMutation {
    /// Create a group together with its participants and animators
    async fn add_group(
        &self,
        ctx: &Context<'_>,
        name: String,
        participants: Option<Vec<Option<ParticipantInput>>>,
        animators: Vec<AnimatorInput>,
    ) -> Result<Option<Group>> {
        let context = ctx.data::<GraphQLContext>()?;
        let args = json!({
            "name": &name,
            "participants": &participants,
            "animators": &animators,
        });

        let participants = into_drafts("participants", participants.unwrap_or_default())
            .map_err(|e| StructuredError::rejected(&e, &args))?;
        let animators = into_drafts("animators", animators.into_iter().map(Some).collect())
            .map_err(|e| StructuredError::rejected(&e, &args))?;

        let group = context
            .groups
            .add_group(name, participants, animators)
            .await
            .map_err(|e| StructuredError::rejected(&e, &args))?;

        Ok(Some(Group::from(group)))
    }

    /// Update a group; supplied child lists replace the existing ones
    async fn edit_group(
        &self,
        ctx: &Context<'_>,
        group_id: ID,
        name: Option<String>,
        participants: Option<Vec<Option<ParticipantInput>>>,
        animators: Option<Vec<Option<AnimatorInput>>>,
    ) -> Result<Option<Group>> {
        let context = ctx.data::<GraphQLContext>()?;
        let args = json!({
            "groupId": group_id.as_str(),
            "name": &name,
            "participants": &participants,
            "animators": &animators,
        });

        let participants = participants
            .map(|inputs| into_drafts("participants", inputs))
            .transpose()
            .map_err(|e| StructuredError::rejected(&e, &args))?;
        let animators = animators
            .map(|inputs| into_drafts("animators", inputs))
            .transpose()
            .map_err(|e| StructuredError::rejected(&e, &args))?;

        let group = context
            .groups
            .edit_group(&group_id, GroupUpdate::new(name, participants, animators))
            .await
            .map_err(|e| StructuredError::rejected(&e, &args))?;

        Ok(group.map(Group::from))
    }

    /// Delete a group and the participants and animators it owns
    async fn delete_group(&self, ctx: &Context<'_>, group_id: ID) -> Result<Option<Group>> {
        let context = ctx.data::<GraphQLContext>()?;
        let args = json!({ "groupId": group_id.as_str() });

        let removed = context
            .groups
            .delete_group(&group_id)
            .await
            .map_err(|e| StructuredError::rejected(&e, &args))?;

        Ok(removed.map(Group::from))
    }
}
