use leptos_leaflet::{
    leaflet::{LatLng, LatLngBounds},
    prelude::Position as LeafletPosition,
};
use map_core::{BoundingBox, Position};

const PIN_PATH: &str = "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";

pub const MARKER_ICON_SIZE: (f64, f64) = (32.0, 32.0);
pub const MARKER_ICON_ANCHOR: (f64, f64) = (16.0, 32.0);
pub const CURRENT_LOCATION_ICON_ANCHOR: (f64, f64) = (16.0, 16.0);

fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(svg))
}

/// Pin shaped marker filled with `color`.
pub fn marker_icon_url(color: &str) -> String {
    svg_data_url(&format!(
        "<svg xmlns='http://www.w3.org/2000/svg' height='24' viewBox='0 0 24 24'>\
         <path d='{PIN_PATH}' fill='{color}'/></svg>"
    ))
}

pub fn current_location_icon_url() -> String {
    svg_data_url(
        "<svg xmlns='http://www.w3.org/2000/svg' height='24' viewBox='0 0 24 24'>\
         <circle cx='12' cy='12' r='10' fill='#4F46E5' fill-opacity='0.2'/>\
         <circle cx='12' cy='12' r='6' fill='#4F46E5' fill-opacity='0.4'/>\
         <circle cx='12' cy='12' r='3' fill='#4F46E5'/></svg>",
    )
}

pub fn to_marker_position(position: Position) -> LeafletPosition {
    LeafletPosition::new(position.lat, position.lng)
}

pub fn to_lat_lng(position: Position) -> LatLng {
    LatLng::new(position.lat, position.lng)
}

pub fn to_lat_lng_bounds(bounds: &BoundingBox) -> LatLngBounds {
    LatLngBounds::new(
        &to_lat_lng(bounds.south_west()),
        &to_lat_lng(bounds.north_east()),
    )
}
