use std::fmt;

use thiserror::Error;

use crate::FieldError;

/// Construction failed: one or more properties violate their schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("property validation failed for {entity}:{}", FieldList(.errors))]
pub struct PropertyValidationError {
    pub entity: &'static str,
    pub errors: Vec<FieldError>,
}

struct FieldList<'a>(&'a [FieldError]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in self.0 {
            write!(f, "\n  {e}")?;
        }
        Ok(())
    }
}

pub type EntityResult<T> = Result<T, PropertyValidationError>;
