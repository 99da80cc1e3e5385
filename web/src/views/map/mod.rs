pub mod location_details;
pub mod map_controls;
pub mod map_marker;
pub mod map_renderer;
pub mod map_wrapper;
pub mod marker_tooltip;
pub mod util;
