//! Department model representing one entry in the contact directory.

use serde::{Deserialize, Serialize};

/// A department (or office) in the organizational contact directory.
///
/// The source dataset is a JSON object keyed by display name, so `name`
/// and `slug` are not part of the record body: the loader populates them
/// after deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Department {
    /// Display name of the department (the natural key in the dataset)
    pub name: String,

    /// Routing identifier derived from the name, unique within the loaded set
    #[serde(rename = "name_slug")]
    pub slug: String,

    /// Contact email address
    pub email: String,

    /// Name of the person handling requests
    pub contact_name: String,

    /// Free-form notes about the department
    pub notes: String,

    /// Department website
    pub url: String,
}

impl Department {
    /// Create a department with the given display name and empty attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: String::new(),
            email: String::new(),
            contact_name: String::new(),
            notes: String::new(),
            url: String::new(),
        }
    }

    /// Project this record into the lightweight search response shape.
    pub fn search_hit(&self) -> SearchHit {
        SearchHit {
            name: self.name.clone(),
            name_slug: self.slug.clone(),
            email: self.email.clone(),
        }
    }
}

impl Default for Department {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// One element of a search response.
///
/// A read-only projection of a matched [`Department`]; no field is ever
/// absent (empty string if unset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    /// Display name of the matched department
    pub name: String,

    /// Routing slug of the matched department
    pub name_slug: String,

    /// Contact email (empty if the department has none)
    pub email: String,
}
