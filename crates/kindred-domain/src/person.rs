//! Person module - the comparison input

use serde::{Deserialize, Serialize};

/// A person as recorded in one family tree
///
/// Only `name` is required. Every other field is optional and its absence
/// removes the corresponding rule from consideration rather than scoring zero.
///
/// # Examples
///
/// ```
/// use kindred_domain::PersonRecord;
///
/// let person = PersonRecord::new("Anna Kowalska")
///     .with_date_of_birth("1912-03-04")
///     .with_location("Lviv");
/// assert_eq!(person.date_of_birth(), Some("1912-03-04"));
/// assert_eq!(person.parent_names(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Identifier assigned by the owning store (not used for scoring)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Full display name
    #[serde(default)]
    pub name: String,

    /// ISO-ish date of birth (e.g. "1990-05-01", "1990")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Place of origin or residence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Names of the person's parents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_names: Option<ParentNames>,
}

/// Parent-identifying attributes of a person
///
/// Each slot is compared only against the same slot on the other record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentNames {
    /// Father's full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,

    /// Mother's full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<String>,
}

impl PersonRecord {
    /// Create a record with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the store identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the date of birth
    pub fn with_date_of_birth(mut self, date: impl Into<String>) -> Self {
        self.date_of_birth = Some(date.into());
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the parent names
    pub fn with_parents(mut self, parents: ParentNames) -> Self {
        self.parent_names = Some(parents);
        self
    }

    /// Whether the required name is present (non-blank)
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Date of birth, treating a blank string as absent
    pub fn date_of_birth(&self) -> Option<&str> {
        non_blank(self.date_of_birth.as_deref())
    }

    /// Location, treating a blank string as absent
    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    /// Parent names, if any slot is filled
    pub fn parent_names(&self) -> Option<&ParentNames> {
        self.parent_names.as_ref().filter(|p| !p.is_empty())
    }
}

impl ParentNames {
    /// Create parent names from optional father and mother names
    pub fn new(father: Option<&str>, mother: Option<&str>) -> Self {
        Self {
            father: father.map(str::to_string),
            mother: mother.map(str::to_string),
        }
    }

    /// Father's name, treating a blank string as absent
    pub fn father(&self) -> Option<&str> {
        non_blank(self.father.as_deref())
    }

    /// Mother's name, treating a blank string as absent
    pub fn mother(&self) -> Option<&str> {
        non_blank(self.mother.as_deref())
    }

    /// True when neither slot holds a name
    pub fn is_empty(&self) -> bool {
        self.father().is_none() && self.mother().is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let person = PersonRecord::new("John Smith")
            .with_id("p-1")
            .with_date_of_birth("1990-05-01")
            .with_location("Boston")
            .with_parents(ParentNames::new(Some("Robert Smith"), None));

        assert_eq!(person.id.as_deref(), Some("p-1"));
        assert_eq!(person.date_of_birth(), Some("1990-05-01"));
        assert_eq!(person.location(), Some("Boston"));
        assert_eq!(person.parent_names().unwrap().father(), Some("Robert Smith"));
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let person = PersonRecord::new("   ")
            .with_date_of_birth("")
            .with_location("  ")
            .with_parents(ParentNames::new(Some(" "), None));

        assert!(!person.has_name());
        assert_eq!(person.date_of_birth(), None);
        assert_eq!(person.location(), None);
        assert_eq!(person.parent_names(), None);
    }

    #[test]
    fn test_camel_case_json() {
        let json = r#"{
            "name": "Anna Nowak",
            "dateOfBirth": "1901",
            "parentNames": { "mother": "Maria Nowak" }
        }"#;

        let person: PersonRecord = serde_json::from_str(json).unwrap();
        assert_eq!(person.name, "Anna Nowak");
        assert_eq!(person.date_of_birth(), Some("1901"));
        assert_eq!(person.location(), None);
        assert_eq!(person.parent_names().unwrap().mother(), Some("Maria Nowak"));
    }

    #[test]
    fn test_missing_name_deserializes_empty() {
        let person: PersonRecord = serde_json::from_str(r#"{"location": "Kraków"}"#).unwrap();
        assert!(!person.has_name());
    }
}
