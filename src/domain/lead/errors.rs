//! Lead Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("{0}: field is required")]
    MissingField(&'static str),

    #[error("{field}: '{value}' is not a valid email address")]
    InvalidEmail { field: &'static str, value: String },
}
