//! Persona segment wire format and catalog normalization
//!
//! `GET /persona-segments` returns a column-oriented mapping: each key is a
//! column name and each value the ordered list of cell values for that
//! column. Profile identifiers and their descriptions arrive as two parallel
//! columns aligned by index. That shape is normalized here, once, at the
//! wire boundary, so the rest of the client works with id/description pairs
//! and never repeats the positional lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Column carrying the profile identifiers.
pub const PROFILE_COLUMN: &str = "persona_age_group_profile";

/// Column carrying the human-readable segment descriptions.
pub const DESCRIPTION_COLUMN: &str = "persona_segment_description";

/// Raw column-oriented payload of `GET /persona-segments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaSegments {
    pub columns: HashMap<String, Vec<String>>,
}

impl PersonaSegments {
    fn column(&self, name: &str) -> &[String] {
        self.columns.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// One selectable audience persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaProfile {
    pub id: String,
    pub description: String,
}

/// Ordered list of personas resolved from the wire columns.
///
/// Construction zips the identifier and description columns; a length
/// mismatch keeps the aligned prefix and a missing column yields an empty
/// catalog. Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaCatalog {
    profiles: Vec<PersonaProfile>,
}

impl PersonaCatalog {
    pub fn from_segments(segments: &PersonaSegments) -> Self {
        let profiles = segments
            .column(PROFILE_COLUMN)
            .iter()
            .zip(segments.column(DESCRIPTION_COLUMN))
            .map(|(id, description)| PersonaProfile {
                id: id.clone(),
                description: description.clone(),
            })
            .collect();
        Self { profiles }
    }

    pub fn profiles(&self) -> &[PersonaProfile] {
        &self.profiles
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Default selection for the form: the first catalog entry.
    pub fn first(&self) -> Option<&PersonaProfile> {
        self.profiles.first()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.profiles.iter().any(|p| p.id == id)
    }

    /// Resolve the description for a profile id.
    pub fn description_for(&self, id: &str) -> Option<&str> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.description.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(ids: &[&str], descriptions: &[&str]) -> PersonaSegments {
        let mut columns = HashMap::new();
        columns.insert(
            PROFILE_COLUMN.to_string(),
            ids.iter().map(|s| s.to_string()).collect(),
        );
        columns.insert(
            DESCRIPTION_COLUMN.to_string(),
            descriptions.iter().map(|s| s.to_string()).collect(),
        );
        PersonaSegments { columns }
    }

    #[test]
    fn catalog_pairs_ids_with_descriptions_by_index() {
        let catalog = PersonaCatalog::from_segments(&segments(
            &["TEEN_URBAN", "ADULT_SUBURBAN"],
            &["urban teens", "suburban adults"],
        ));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.description_for("TEEN_URBAN"), Some("urban teens"));
        assert_eq!(
            catalog.description_for("ADULT_SUBURBAN"),
            Some("suburban adults")
        );
    }

    #[test]
    fn length_mismatch_keeps_the_aligned_prefix() {
        let catalog = PersonaCatalog::from_segments(&segments(
            &["A", "B", "C"],
            &["first", "second"],
        ));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("B"));
        assert!(!catalog.contains("C"));
    }

    #[test]
    fn missing_column_yields_empty_catalog() {
        let mut columns = HashMap::new();
        columns.insert(
            PROFILE_COLUMN.to_string(),
            vec!["TEEN_URBAN".to_string()],
        );
        let catalog = PersonaCatalog::from_segments(&PersonaSegments { columns });

        assert!(catalog.is_empty());
        assert_eq!(catalog.first(), None);
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let mut wire = segments(&["TEEN_URBAN"], &["urban teens"]);
        wire.columns
            .insert("persona_income_band".to_string(), vec!["high".to_string()]);

        let catalog = PersonaCatalog::from_segments(&wire);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn first_returns_the_leading_profile() {
        let catalog =
            PersonaCatalog::from_segments(&segments(&["A", "B"], &["first", "second"]));
        assert_eq!(catalog.first().map(|p| p.id.as_str()), Some("A"));
    }

    #[test]
    fn description_for_unknown_id_is_none() {
        let catalog = PersonaCatalog::from_segments(&segments(&["A"], &["first"]));
        assert_eq!(catalog.description_for("Z"), None);
    }

    #[test]
    fn segments_deserialize_from_wire_object() {
        let json = r#"{
            "persona_age_group_profile": ["TEEN_URBAN"],
            "persona_segment_description": ["urban teens"]
        }"#;
        let wire: PersonaSegments = serde_json::from_str(json).expect("valid wire shape");
        let catalog = PersonaCatalog::from_segments(&wire);

        assert_eq!(catalog.description_for("TEEN_URBAN"), Some("urban teens"));
    }
}
