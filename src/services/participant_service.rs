use std::sync::Arc;

use crate::errors::StoreResult;
use crate::model::Participant;
use crate::store::EntityStore;

#[derive(Clone)]
pub struct ParticipantService {
    store: Arc<dyn EntityStore>,
}

impl ParticipantService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Batch fetch the participants a group references, in store order
    pub async fn participants_for(&self, ids: &[String]) -> StoreResult<Vec<Participant>> {
        self.store.find_participants(ids).await
    }
}
