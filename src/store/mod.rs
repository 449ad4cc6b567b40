//! Persistence interface consumed by the services
//!
//! The store deals in whole documents: create, find by id, find by a set of
//! ids, update and delete. Each call is atomic for the single document it
//! touches and nothing more; multi-document consistency is the caller's job.

mod sea_orm_store;

pub use sea_orm_store::SeaOrmStore;

use async_trait::async_trait;

use crate::errors::StoreResult;
use crate::model::{Animator, Group, Participant};

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Every group, in store order
    async fn all_groups(&self) -> StoreResult<Vec<Group>>;

    async fn find_group(&self, id: &str) -> StoreResult<Option<Group>>;

    async fn insert_group(&self, group: &Group) -> StoreResult<()>;

    /// Overwrite a group document. Returns `false` when no such group exists.
    async fn update_group(&self, group: &Group) -> StoreResult<bool>;

    /// Returns `false` when no such group exists
    async fn delete_group(&self, id: &str) -> StoreResult<bool>;

    /// Batch fetch; unknown ids are skipped and order is not guaranteed
    async fn find_participants(&self, ids: &[String]) -> StoreResult<Vec<Participant>>;

    async fn insert_participant(&self, participant: &Participant) -> StoreResult<()>;

    /// Returns the number of documents removed
    async fn delete_participants(&self, ids: &[String]) -> StoreResult<u64>;

    async fn find_animator(&self, id: &str) -> StoreResult<Option<Animator>>;

    /// Batch fetch; unknown ids are skipped and order is not guaranteed
    async fn find_animators(&self, ids: &[String]) -> StoreResult<Vec<Animator>>;

    async fn insert_animator(&self, animator: &Animator) -> StoreResult<()>;

    /// Overwrite an animator document. Returns `false` when no such animator exists.
    async fn update_animator(&self, animator: &Animator) -> StoreResult<bool>;

    /// Returns the number of documents removed
    async fn delete_animators(&self, ids: &[String]) -> StoreResult<u64>;
}
