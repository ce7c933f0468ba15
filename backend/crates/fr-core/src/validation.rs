//! Input schemas applied at the request boundary before a use case runs.
//!
//! Every rule is checked; all violations come back together in one
//! [`CoreError::Validation`].

use crate::{
    AddCommentInput, CoreError, CreateFeatureRequestInput, FieldError, Priority,
    Result as CoreErrorResult, Status, UpdateFeatureRequestInput,
};

use std::str::FromStr;

use uuid::Uuid;

pub const TITLE_MIN_LENGTH: usize = 3;
pub const TITLE_MAX_LENGTH: usize = 120;
pub const DESCRIPTION_MIN_LENGTH: usize = 10;
pub const DESCRIPTION_MAX_LENGTH: usize = 2000;
pub const COMMENT_MIN_LENGTH: usize = 1;
pub const COMMENT_MAX_LENGTH: usize = 1000;

pub struct InputValidator;

impl InputValidator {
    #[track_caller]
    pub fn validate_create(
        title: String,
        description: String,
        priority: Option<&str>,
    ) -> CoreErrorResult<CreateFeatureRequestInput> {
        let mut errors = Vec::new();

        Self::check_length(
            &mut errors,
            &title,
            "title",
            "Title",
            TITLE_MIN_LENGTH,
            TITLE_MAX_LENGTH,
        );
        Self::check_length(
            &mut errors,
            &description,
            "description",
            "Description",
            DESCRIPTION_MIN_LENGTH,
            DESCRIPTION_MAX_LENGTH,
        );

        let priority = match priority {
            None => Some(Priority::default()),
            Some(value) => Self::parse_enum::<Priority>(&mut errors, value, "priority"),
        };

        match priority {
            Some(priority) if errors.is_empty() => Ok(CreateFeatureRequestInput {
                title,
                description,
                priority,
            }),
            _ => Err(CoreError::validation(errors)),
        }
    }

    #[track_caller]
    pub fn validate_update(
        status: Option<&str>,
        priority: Option<&str>,
    ) -> CoreErrorResult<UpdateFeatureRequestInput> {
        let mut errors = Vec::new();

        let status = status.and_then(|s| Self::parse_enum::<Status>(&mut errors, s, "status"));
        let priority =
            priority.and_then(|p| Self::parse_enum::<Priority>(&mut errors, p, "priority"));

        if !errors.is_empty() {
            return Err(CoreError::validation(errors));
        }

        if status.is_none() && priority.is_none() {
            return Err(CoreError::validation(vec![FieldError::form(
                "At least one of status or priority must be provided",
            )]));
        }

        Ok(UpdateFeatureRequestInput { status, priority })
    }

    #[track_caller]
    pub fn validate_comment(body: String) -> CoreErrorResult<AddCommentInput> {
        let length = body.chars().count();

        if length < COMMENT_MIN_LENGTH {
            return Err(CoreError::validation(vec![FieldError::new(
                "body",
                "Comment cannot be empty",
            )]));
        }

        if length > COMMENT_MAX_LENGTH {
            return Err(CoreError::validation(vec![FieldError::new(
                "body",
                format!("Comment must be at most {} characters", COMMENT_MAX_LENGTH),
            )]));
        }

        Ok(AddCommentInput { body })
    }

    #[track_caller]
    pub fn validate_id(id: &str) -> CoreErrorResult<Uuid> {
        Uuid::parse_str(id)
            .map_err(|_| CoreError::validation(vec![FieldError::new("id", "Invalid ID format")]))
    }

    fn check_length(
        errors: &mut Vec<FieldError>,
        value: &str,
        field: &str,
        label: &str,
        min: usize,
        max: usize,
    ) {
        let length = value.chars().count();

        if length < min {
            errors.push(FieldError::new(
                field,
                format!("{} must be at least {} characters", label, min),
            ));
        } else if length > max {
            errors.push(FieldError::new(
                field,
                format!("{} must be at most {} characters", label, max),
            ));
        }
    }

    fn parse_enum<T: FromStr>(errors: &mut Vec<FieldError>, value: &str, field: &str) -> Option<T> {
        match T::from_str(value) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(FieldError::new(
                    field,
                    format!("Invalid {}: {}", field, value),
                ));
                None
            }
        }
    }
}
