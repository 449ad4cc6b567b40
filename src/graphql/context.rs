use std::sync::Arc;

use crate::services::{AnimatorService, GroupService, ParticipantService};
use crate::store::EntityStore;

#[derive(Clone)]
pub struct GraphQLContext {
    pub groups: Arc<GroupService>,
    pub animators: Arc<AnimatorService>,
    pub participants: Arc<ParticipantService>,
}

impl GraphQLContext {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            groups: Arc::new(GroupService::new(store.clone())),
            animators: Arc::new(AnimatorService::new(store.clone())),
            participants: Arc::new(ParticipantService::new(store)),
        }
    }
}
