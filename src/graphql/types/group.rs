use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Animator, Participant};
use crate::model;
use crate::services::RemovedGroup;

/// Children are fetched by reference unless the group was built with them
/// already loaded, as happens for a deleted group.
pub struct Group {
    record: model::Group,
    participants: Option<Vec<model::Participant>>,
    animators: Option<Vec<model::Animator>>,
}

impl From<model::Group> for Group {
    fn from(group: model::Group) -> Self {
        Self {
            record: group,
            participants: None,
            animators: None,
        }
    }
}

impl From<RemovedGroup> for Group {
    fn from(removed: RemovedGroup) -> Self {
        Self {
            record: removed.group,
            participants: Some(removed.participants),
            animators: Some(removed.animators),
        }
    }
}

#[Object]
impl Group {
    async fn name(&self) -> &str {
        &self.record.name
    }

    async fn participants(&self, ctx: &Context<'_>) -> Result<Vec<Participant>> {
        let participants = match &self.participants {
            Some(loaded) => loaded.clone(),
            None => {
                let context = ctx.data::<GraphQLContext>()?;
                context
                    .participants
                    .participants_for(&self.record.participant_ids)
                    .await
                    .to_graphql_result()?
            }
        };

        Ok(participants.into_iter().map(Participant::from).collect())
    }

    async fn animators(&self, ctx: &Context<'_>) -> Result<Vec<Animator>> {
        let animators = match &self.animators {
            Some(loaded) => loaded.clone(),
            None => {
                let context = ctx.data::<GraphQLContext>()?;
                context
                    .animators
                    .animators_for(&self.record.animator_ids)
                    .await
                    .to_graphql_result()?
            }
        };

        Ok(animators.into_iter().map(Animator::from).collect())
    }

    async fn id(&self) -> ID {
        ID(self.record.id.clone())
    }
}
