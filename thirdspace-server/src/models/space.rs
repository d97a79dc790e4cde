//! Space listing input

use super::validation::{require_text, ValidationError};

/// Validated space listing.
///
/// Only `name` must be non-blank. The remaining fields are free text and
/// are stored exactly as submitted; `location_data` is typically a map link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpace {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub photo_url: String,
    pub location_data: String,
}

impl NewSpace {
    pub fn new(
        name: String,
        description: String,
        tags: String,
        photo_url: String,
        location_data: String,
    ) -> Result<Self, ValidationError> {
        require_text("name", &name)?;
        Ok(Self {
            name,
            description,
            tags,
            photo_url,
            location_data,
        })
    }
}
