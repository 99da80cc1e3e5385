use std::collections::HashSet;

use crate::{
    error::{FetchError, ValidationError},
    location::CategoryMap,
};

/// Decodes and validates the body of the location endpoint.
pub fn decode_locations(body: &str) -> Result<CategoryMap, FetchError> {
    let data: CategoryMap =
        serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))?;
    validate(&data)?;
    log::info!(
        "Decoded {} locations in {} categories",
        data.location_count(),
        data.len()
    );
    Ok(data)
}

/// Checks that ids are unique and positions are real coordinates.
pub fn validate(data: &CategoryMap) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(data.location_count());
    for location in data.locations() {
        if !seen.insert(location.id) {
            return Err(ValidationError::DuplicateId { id: location.id });
        }
        if !location.position.is_valid() {
            return Err(ValidationError::InvalidPosition {
                id: location.id,
                lat: location.position.lat,
                lng: location.position.lng,
            });
        }
    }
    Ok(())
}
