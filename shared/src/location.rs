use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer};

/// A single named place on the map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub identifier: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Trusted markup, rendered verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    /// Horizontal position in percent of the pins container.
    pub left: f64,
    /// Vertical position in percent of the pins container.
    pub top: f64,
    /// Stacking order; any JSON number is accepted.
    #[serde(default)]
    pub z_index: Option<f64>,
}

/// `null` decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Location {
    /// Image URL, or `None` when absent or blank.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Top-level shape of the data file. Entries stay untyped so one bad record
/// doesn't reject the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationsDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Malformed(String),
    BlankIdentifier,
    DuplicateIdentifier(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Malformed(detail) => write!(f, "malformed record: {detail}"),
            SkipReason::BlankIdentifier => f.write_str("blank identifier"),
            SkipReason::DuplicateIdentifier(id) => write!(f, "duplicate identifier \"{id}\""),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the record in the source `locations` array.
    pub index: usize,
    pub reason: SkipReason,
}

/// Ordered, immutable set of locations with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationStore {
    locations: Vec<Location>,
}

impl LocationStore {
    /// Validate raw records, keeping the valid ones in source order.
    pub fn from_records(records: Vec<serde_json::Value>) -> (Self, Vec<SkippedRecord>) {
        let mut locations = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (index, record) in records.into_iter().enumerate() {
            match validate(record, &seen) {
                Ok(location) => {
                    seen.insert(location.identifier.clone());
                    locations.push(location);
                }
                Err(reason) => skipped.push(SkippedRecord { index, reason }),
            }
        }

        (Self { locations }, skipped)
    }

    pub fn from_document(document: LocationsDocument) -> (Self, Vec<SkippedRecord>) {
        Self::from_records(document.locations)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn get(&self, identifier: &str) -> Option<&Location> {
        self.locations
            .iter()
            .find(|location| location.identifier == identifier)
    }
}

fn validate(record: serde_json::Value, seen: &HashSet<String>) -> Result<Location, SkipReason> {
    let location: Location =
        serde_json::from_value(record).map_err(|e| SkipReason::Malformed(e.to_string()))?;
    if location.identifier.trim().is_empty() {
        return Err(SkipReason::BlankIdentifier);
    }
    if seen.contains(&location.identifier) {
        return Err(SkipReason::DuplicateIdentifier(location.identifier));
    }
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::{LocationStore, LocationsDocument, SkipReason};
    use serde_json::json;

    fn store_from(value: serde_json::Value) -> (LocationStore, Vec<super::SkippedRecord>) {
        let document: LocationsDocument = serde_json::from_value(value).unwrap();
        LocationStore::from_document(document)
    }

    #[test]
    fn loads_minimal_record_with_defaults() {
        let (store, skipped) = store_from(json!({
            "locations": [{
                "identifier": "a",
                "name": "Alpha",
                "description": "<p>A</p>",
                "link": "#a",
                "left": 10,
                "top": 20
            }]
        }));

        assert!(skipped.is_empty());
        assert_eq!(store.len(), 1);
        let alpha = store.get("a").unwrap();
        assert_eq!(alpha.name, "Alpha");
        assert_eq!(alpha.description, "<p>A</p>");
        assert_eq!(alpha.link, "#a");
        assert_eq!(alpha.left, 10.0);
        assert_eq!(alpha.top, 20.0);
        assert_eq!(alpha.z_index, None);
        assert_eq!(alpha.image_url(), None);
    }

    #[test]
    fn missing_locations_field_is_empty() {
        let (store, skipped) = store_from(json!({}));
        assert!(store.is_empty());
        assert!(skipped.is_empty());
    }

    #[test]
    fn reads_camel_case_z_index() {
        let (store, _) = store_from(json!({
            "locations": [{ "identifier": "z", "name": "Z", "left": 1, "top": 2, "zIndex": 7 }]
        }));
        assert_eq!(store.get("z").unwrap().z_index, Some(7.0));
    }

    #[test]
    fn null_locations_field_is_empty() {
        let (store, skipped) = store_from(json!({ "locations": null }));
        assert!(store.is_empty());
        assert!(skipped.is_empty());
    }

    #[test]
    fn accepts_float_z_index() {
        let (store, skipped) = store_from(json!({
            "locations": [
                { "identifier": "whole", "name": "W", "left": 1, "top": 2, "zIndex": 10.0 },
                { "identifier": "frac", "name": "F", "left": 1, "top": 2, "zIndex": 2.5 },
                { "identifier": "none", "name": "N", "left": 1, "top": 2, "zIndex": null }
            ]
        }));
        assert!(skipped.is_empty());
        assert_eq!(store.get("whole").unwrap().z_index, Some(10.0));
        assert_eq!(store.get("frac").unwrap().z_index, Some(2.5));
        assert_eq!(store.get("none").unwrap().z_index, None);
    }

    #[test]
    fn null_description_and_link_become_empty() {
        let (store, skipped) = store_from(json!({
            "locations": [{
                "identifier": "n",
                "name": "Nulls",
                "left": 1,
                "top": 1,
                "description": null,
                "link": null,
                "image": null
            }]
        }));
        assert!(skipped.is_empty());
        let loc = store.get("n").unwrap();
        assert_eq!(loc.description, "");
        assert_eq!(loc.link, "");
        assert_eq!(loc.image_url(), None);
    }

    #[test]
    fn blank_image_is_treated_as_absent() {
        let (store, _) = store_from(json!({
            "locations": [
                { "identifier": "blank", "name": "B", "left": 0, "top": 0, "image": "" },
                { "identifier": "spaces", "name": "S", "left": 0, "top": 0, "image": "   " },
                { "identifier": "set", "name": "T", "left": 0, "top": 0, "image": "img/t.jpg" }
            ]
        }));
        assert_eq!(store.get("blank").unwrap().image_url(), None);
        assert_eq!(store.get("spaces").unwrap().image_url(), None);
        assert_eq!(store.get("set").unwrap().image_url(), Some("img/t.jpg"));
    }

    #[test]
    fn skips_records_missing_required_fields() {
        let (store, skipped) = store_from(json!({
            "locations": [
                { "identifier": "ok", "name": "Ok", "left": 5, "top": 5 },
                { "identifier": "no-coords", "name": "Lost" },
                { "name": "Anonymous", "left": 1, "top": 1 },
                "not an object"
            ]
        }));

        assert_eq!(store.len(), 1);
        let indexes: Vec<usize> = skipped.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
        assert!(
            skipped
                .iter()
                .all(|s| matches!(s.reason, SkipReason::Malformed(_)))
        );
    }

    #[test]
    fn skips_blank_identifier() {
        let (store, skipped) = store_from(json!({
            "locations": [{ "identifier": "  ", "name": "Blank", "left": 1, "top": 1 }]
        }));
        assert!(store.is_empty());
        assert_eq!(skipped[0].reason, SkipReason::BlankIdentifier);
    }

    #[test]
    fn duplicate_identifier_keeps_first_record() {
        let (store, skipped) = store_from(json!({
            "locations": [
                { "identifier": "a", "name": "First", "left": 1, "top": 1 },
                { "identifier": "b", "name": "Other", "left": 2, "top": 2 },
                { "identifier": "a", "name": "Second", "left": 3, "top": 3 }
            ]
        }));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").unwrap().name, "First");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].index, 2);
        assert_eq!(
            skipped[0].reason,
            SkipReason::DuplicateIdentifier("a".to_string())
        );
    }

    #[test]
    fn preserves_source_order() {
        let (store, _) = store_from(json!({
            "locations": [
                { "identifier": "c", "name": "C", "left": 0, "top": 0 },
                { "identifier": "a", "name": "A", "left": 0, "top": 0 },
                { "identifier": "b", "name": "B", "left": 0, "top": 0 }
            ]
        }));
        let ids: Vec<&str> = store.iter().map(|l| l.identifier.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn skip_reason_messages_name_the_problem() {
        assert_eq!(
            SkipReason::DuplicateIdentifier("x".into()).to_string(),
            "duplicate identifier \"x\""
        );
        assert_eq!(SkipReason::BlankIdentifier.to_string(), "blank identifier");
    }
}
