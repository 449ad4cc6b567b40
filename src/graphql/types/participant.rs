use async_graphql::*;
use serde::Serialize;

use crate::errors::ValidationError;
use crate::graphql::errors::StructuredError;
use crate::model::{self, ParticipantDraft};
use crate::services::ValidationService;

pub struct Participant(model::Participant);

impl From<model::Participant> for Participant {
    fn from(participant: model::Participant) -> Self {
        Self(participant)
    }
}

#[Object]
impl Participant {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> Result<i32> {
        self.0
            .age
            .ok_or_else(|| StructuredError::missing_value("Participant", &self.0.id, "age"))
    }

    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }
}

#[derive(InputObject, Clone, Debug, Serialize)]
pub struct ParticipantInput {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl TryFrom<ParticipantInput> for ParticipantDraft {
    type Error = ValidationError;

    fn try_from(input: ParticipantInput) -> Result<Self, Self::Error> {
        let name = ValidationService::require("name", input.name)?;
        ParticipantDraft::new(name, input.age)
    }
}
