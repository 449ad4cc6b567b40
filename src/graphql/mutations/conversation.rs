use async_graphql::*;
use serde_json::json;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Animator;

#[derive(Default)]
pub struct ConversationMutation;

#[Object]
impl ConversationMutation {
    /// Append a conversation summary to an animator
    async fn add_conversation(
        &self,
        ctx: &Context<'_>,
        animator_id: ID,
        summary: String,
    ) -> Result<Option<Animator>> {
        let context = ctx.data::<GraphQLContext>()?;
        let args = json!({ "animatorId": animator_id.as_str(), "summary": &summary });

        let animator = context
            .animators
            .add_conversation(&animator_id, summary)
            .await
            .map_err(|e| StructuredError::rejected(&e, &args))?;

        Ok(animator.map(Animator::from))
    }

    /// Replace the conversation summary at `index`
    async fn edit_conversation(
        &self,
        ctx: &Context<'_>,
        animator_id: ID,
        summary: String,
        index: i32,
    ) -> Result<Option<Animator>> {
        let context = ctx.data::<GraphQLContext>()?;
        let args = json!({
            "animatorId": animator_id.as_str(),
            "summary": &summary,
            "index": index,
        });

        let animator = context
            .animators
            .edit_conversation(&animator_id, summary, index)
            .await
            .map_err(|e| StructuredError::rejected(&e, &args))?;

        Ok(animator.map(Animator::from))
    }

    /// Remove the conversation summary at `index`
    async fn delete_conversation(
        &self,
        ctx: &Context<'_>,
        animator_id: ID,
        index: i32,
    ) -> Result<Option<Animator>> {
        let context = ctx.data::<GraphQLContext>()?;
        let args = json!({ "animatorId": animator_id.as_str(), "index": index });

        let animator = context
            .animators
            .delete_conversation(&animator_id, index)
            .await
            .map_err(|e| StructuredError::rejected(&e, &args))?;

        Ok(animator.map(Animator::from))
    }
}
