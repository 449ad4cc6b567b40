use async_graphql::*;
use serde::Serialize;

use crate::errors::ValidationError;
use crate::model::{self, AnimatorDraft};
use crate::services::ValidationService;

pub struct Animator(model::Animator);

impl From<model::Animator> for Animator {
    fn from(animator: model::Animator) -> Self {
        Self(animator)
    }
}

#[Object]
impl Animator {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn conversations(&self) -> Option<Vec<Option<String>>> {
        Some(self.0.conversations.iter().cloned().map(Some).collect())
    }

    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }
}

#[derive(InputObject, Clone, Debug, Serialize)]
pub struct AnimatorInput {
    pub name: Option<String>,
    pub conversations: Option<Vec<Option<String>>>,
}

impl TryFrom<AnimatorInput> for AnimatorDraft {
    type Error = ValidationError;

    fn try_from(input: AnimatorInput) -> Result<Self, Self::Error> {
        let name = ValidationService::require("name", input.name)?;
        let conversations = ValidationService::require_entries(
            "conversations",
            input.conversations.unwrap_or_default(),
        )?;
        AnimatorDraft::new(name, conversations)
    }
}
