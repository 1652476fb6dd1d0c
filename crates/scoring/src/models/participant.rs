use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A competitor. Immutable as far as scoring is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,

    #[validate(
        length(min = 1, max = 255, message = "Participant name is required"),
        custom(function = "not_blank")
    )]
    pub name: String,

    /// School year, 1 to 3
    #[validate(range(min = 1, max = 3, message = "Year must be between 1 and 3"))]
    pub year: u8,

    #[serde(default, alias = "photo_url", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("Participant name must not be blank"));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stored_participant() {
        let participant: Participant =
            serde_json::from_str(r#"{"id":"p1","name":"Ana","year":2,"photoUrl":"a.png"}"#)
                .unwrap();
        assert_eq!(participant.year, 2);
        assert_eq!(participant.photo_url.as_deref(), Some("a.png"));
    }

    #[test]
    fn test_year_out_of_range_fails_validation() {
        let participant = Participant {
            id: "p1".to_string(),
            name: "Ana".to_string(),
            year: 4,
            photo_url: None,
        };
        assert!(participant.validate().is_err());
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let participant = Participant {
            id: "p1".to_string(),
            name: "  ".to_string(),
            year: 1,
            photo_url: None,
        };
        let errors = participant.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
