pub mod animator;
pub mod group;
pub mod participant;

pub use animator::*;
pub use group::*;
pub use participant::*;

use crate::errors::ValidationError;

/// Convert a nullable list of inputs into validated drafts, reporting the
/// position of the first rejected entry
pub fn into_drafts<I, D>(list: &str, inputs: Vec<Option<I>>) -> Result<Vec<D>, ValidationError>
where
    D: TryFrom<I, Error = ValidationError>,
{
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            let input = input.ok_or_else(|| {
                ValidationError::new(format!("{}[{}]", list, index), "must not be null")
            })?;
            D::try_from(input).map_err(|e| e.within(list, index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParticipantDraft;

    fn participant(name: &str, age: i32) -> Option<ParticipantInput> {
        Some(ParticipantInput {
            name: Some(name.to_string()),
            age: Some(age),
        })
    }

    #[test]
    fn test_into_drafts_keeps_order() {
        let drafts: Vec<ParticipantDraft> =
            into_drafts("participants", vec![participant("Ann", 30), participant("Bea", 41)])
                .unwrap();

        assert_eq!(drafts[0].name(), "Ann");
        assert_eq!(drafts[1].age(), Some(41));
    }

    #[test]
    fn test_into_drafts_reports_rejected_position() {
        let err = into_drafts::<_, ParticipantDraft>(
            "participants",
            vec![participant("Ann", 30), participant("B", 41)],
        )
        .unwrap_err();

        assert_eq!(err.field, "participants[1].name");
    }

    #[test]
    fn test_into_drafts_rejects_null_entry() {
        let err = into_drafts::<ParticipantInput, ParticipantDraft>("participants", vec![None])
            .unwrap_err();

        assert_eq!(err.field, "participants[0]");
        assert_eq!(err.message, "must not be null");
    }
}
