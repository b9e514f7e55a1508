//! Request validation for purpose payloads.

use crate::error::AppError;
use crate::model::{PurposeChanges, PurposeCreate, PurposeUpdate, NewPurpose};

/// Upper bound on `name`, counted in characters.
pub const NAME_MAX_LENGTH: usize = 100;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body and apply defaults.
    pub fn validate_create(body: PurposeCreate) -> Result<NewPurpose, AppError> {
        validate_name(&body.name)?;
        Ok(NewPurpose::from(body))
    }

    /// Validate an update body. At least one field must be supplied.
    pub fn validate_update(body: PurposeUpdate) -> Result<PurposeChanges, AppError> {
        if body.is_empty() {
            return Err(AppError::BadRequest(
                "at least one of name, description, is_active must be supplied".into(),
            ));
        }
        if let Some(name) = &body.name {
            validate_name(name)?;
        }
        Ok(PurposeChanges::from(body))
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(AppError::BadRequest(format!(
            "name must be at most {} characters",
            NAME_MAX_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str) -> PurposeCreate {
        PurposeCreate {
            name: name.to_string(),
            description: None,
            is_active: None,
        }
    }

    #[test]
    fn accepts_name_at_limit() {
        let name = "é".repeat(NAME_MAX_LENGTH);
        let new = RequestValidator::validate_create(create(&name)).unwrap();
        assert_eq!(new.name, name);
    }

    #[test]
    fn rejects_name_over_limit() {
        let name = "a".repeat(NAME_MAX_LENGTH + 1);
        let err = RequestValidator::validate_create(create(&name)).unwrap_err();
        assert_eq!(err.to_string(), "name must be at most 100 characters");
    }

    #[test]
    fn rejects_blank_name() {
        let err = RequestValidator::validate_create(create("   ")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn update_requires_a_field() {
        let err = RequestValidator::validate_update(PurposeUpdate::default()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn update_checks_name_only_when_supplied() {
        let changes = RequestValidator::validate_update(PurposeUpdate {
            description: Some("new text".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.description.as_deref(), Some("new text"));

        let err = RequestValidator::validate_update(PurposeUpdate {
            name: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
