use std::fmt::{self, Display};

/// Errors produced by catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    EmptyField {
        collection: &'static str,
        id: String,
        field: &'static str,
    },
    InvalidRating {
        collection: &'static str,
        id: String,
        rating: String,
    },
    InvalidPrice {
        id: String,
        reason: String,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::DuplicateId { collection, id } => {
                write!(f, "duplicate id '{id}' in {collection}")
            }
            ModelError::EmptyField {
                collection,
                id,
                field,
            } => write!(f, "{collection} entry '{id}' has an empty {field}"),
            ModelError::InvalidRating {
                collection,
                id,
                rating,
            } => write!(
                f,
                "{collection} entry '{id}' has rating {rating} outside 0..=5"
            ),
            ModelError::InvalidPrice { id, reason } => {
                write!(f, "invalid price for product '{id}': {reason}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
