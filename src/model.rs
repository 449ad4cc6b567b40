//! Domain records and validated drafts
//!
//! `Participant`, `Animator` and `Group` are the documents held by the entity
//! store. Children are never built directly from request input: input is first
//! turned into a `ParticipantDraft` / `AnimatorDraft`, whose constructors run
//! the field constraints, and only a draft can become a stored record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::services::validation::ValidationService;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub age: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animator {
    pub id: String,
    pub name: String,
    pub conversations: Vec<String>,
}

/// A group owns its participants and animators by reference
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub participant_ids: Vec<String>,
    pub animator_ids: Vec<String>,
}

impl Group {
    /// Build a new group owning the given children
    pub fn new(name: String, participants: &[Participant], animators: &[Animator]) -> Self {
        Self {
            id: new_id(),
            name,
            participant_ids: participants.iter().map(|p| p.id.clone()).collect(),
            animator_ids: animators.iter().map(|a| a.id.clone()).collect(),
        }
    }
}

/// Participant input that already satisfied the field constraints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantDraft {
    name: String,
    age: Option<i32>,
}

impl ParticipantDraft {
    pub fn new(name: impl Into<String>, age: Option<i32>) -> Result<Self, ValidationError> {
        let name = ValidationService::validate_name("name", name.into())?;
        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// Assign an identifier, producing the record to persist
    pub fn into_record(self) -> Participant {
        Participant {
            id: new_id(),
            name: self.name,
            age: self.age,
        }
    }
}

/// Animator input that already satisfied the field constraints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimatorDraft {
    name: String,
    conversations: Vec<String>,
}

impl AnimatorDraft {
    pub fn new(
        name: impl Into<String>,
        conversations: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = ValidationService::validate_name("name", name.into())?;
        Ok(Self {
            name,
            conversations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conversations(&self) -> &[String] {
        &self.conversations
    }

    pub fn into_record(self) -> Animator {
        Animator {
            id: new_id(),
            name: self.name,
            conversations: self.conversations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_draft_rejects_short_name() {
        let err = ParticipantDraft::new("A", Some(30)).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_participant_draft_keeps_optional_age() {
        let draft = ParticipantDraft::new("Ann", None).unwrap();
        let record = draft.into_record();
        assert_eq!(record.name, "Ann");
        assert_eq!(record.age, None);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_animator_draft_preserves_conversation_order() {
        let draft =
            AnimatorDraft::new("Bo", vec!["first".to_string(), "second".to_string()]).unwrap();
        assert_eq!(draft.conversations(), ["first", "second"]);
        assert_eq!(draft.into_record().conversations, vec!["first", "second"]);
    }

    #[test]
    fn test_group_references_children_in_order() {
        let participants = vec![
            ParticipantDraft::new("Ann", Some(30)).unwrap().into_record(),
            ParticipantDraft::new("Cy", Some(41)).unwrap().into_record(),
        ];
        let animators = vec![AnimatorDraft::new("Bo", vec![]).unwrap().into_record()];

        let group = Group::new("G1".to_string(), &participants, &animators);

        assert_eq!(
            group.participant_ids,
            vec![participants[0].id.clone(), participants[1].id.clone()]
        );
        assert_eq!(group.animator_ids, vec![animators[0].id.clone()]);
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = ParticipantDraft::new("Ann", None).unwrap().into_record();
        let b = ParticipantDraft::new("Ann", None).unwrap().into_record();
        assert_ne!(a.id, b.id);
    }
}
