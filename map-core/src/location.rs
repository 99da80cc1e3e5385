use indexmap::{map, IndexMap};
use serde::{Deserialize, Deserializer, Serialize};

pub type LocationId = u64;

/// Geographic position in degrees.
///
/// Encoded as a `[latitude, longitude]` pair on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Position {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Position> for [f64; 2] {
    fn from(Position { lat, lng }: Position) -> Self {
        [lat, lng]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub website: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Location {
    #[must_use]
    pub fn has_contact(&self) -> bool {
        self.phone.is_some() || self.email.is_some()
    }
}

/// Locations grouped by category name.
///
/// Categories iterate in the order the payload lists them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(IndexMap<String, Vec<Location>>);

impl CategoryMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[Location]> {
        self.0.get(category).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> map::Iter<'_, String, Vec<Location>> {
        self.0.iter()
    }

    /// All locations, category by category.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.0.values().flatten()
    }

    #[cfg(test)]
    pub(crate) fn find(&self, id: LocationId) -> Option<&Location> {
        self.locations().find(|location| location.id == id)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn location_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<Location>)> for CategoryMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Location>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CategoryMap {
    type Item = (&'a String, &'a Vec<Location>);
    type IntoIter = map::Iter<'a, String, Vec<Location>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn location(id: LocationId, name: &str, lat: f64, lng: f64, tags: &[&str]) -> Location {
        Location {
            id,
            name: name.to_string(),
            position: Position::new(lat, lng),
            description: None,
            website: format!("https://example.org/{id}"),
            tags: tags.iter().map(ToString::to_string).collect(),
            image: format!("https://example.org/{id}.png"),
            address: None,
            phone: None,
            email: None,
            additional_info: None,
        }
    }

    #[test]
    fn position_is_encoded_as_lat_lng_pair() {
        let pos: Position = serde_json::from_str("[52.5, 13.4]").unwrap();
        assert_eq!(pos, Position::new(52.5, 13.4));
        assert_eq!(serde_json::to_string(&pos).unwrap(), "[52.5,13.4]");
    }

    #[test]
    fn deserialize_location_with_optional_fields() {
        let json = r#"{
            "id": 7,
            "name": "SchwuZ",
            "position": [52.4862, 13.4237],
            "website": "https://schwuz.de",
            "image": "https://schwuz.de/logo.png",
            "additionalInfo": "Wheelchair accessible"
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.id, 7);
        assert!(location.tags.is_empty());
        assert_eq!(location.description, None);
        assert_eq!(
            location.additional_info.as_deref(),
            Some("Wheelchair accessible")
        );
        assert!(!location.has_contact());
    }

    #[test]
    fn reject_position_out_of_range() {
        assert!(Position::new(52.0, 13.0).is_valid());
        assert!(!Position::new(91.0, 13.0).is_valid());
        assert!(!Position::new(52.0, -180.5).is_valid());
        assert!(!Position::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn iterate_locations_across_categories() {
        let map: CategoryMap = [
            ("Cafes".to_string(), vec![location(2, "B", 52.1, 13.2, &[])]),
            (
                "Bars".to_string(),
                vec![location(1, "A", 52.0, 13.0, &["lgbt"])],
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.categories().collect::<Vec<_>>(), ["Cafes", "Bars"]);
        assert_eq!(map.location_count(), 2);
        assert_eq!(map.find(2).map(|l| l.name.as_str()), Some("B"));
        assert!(map.find(3).is_none());
    }

    #[test]
    fn null_tags_decode_as_empty() {
        let json = r#"{
            "id": 8,
            "name": "Möbel Olfe",
            "position": [52.4990, 13.4183],
            "website": "https://moebel-olfe.de",
            "tags": null,
            "image": "https://moebel-olfe.de/logo.png"
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert!(location.tags.is_empty());
    }
}
