mod conversation;
mod group;

use async_graphql::*;

/// Main mutation root that combines all mutation submodules
#[derive(Default, MergedObject)]
pub struct Mutation(
    pub group::GroupMutation,
    pub conversation::ConversationMutation,
);
