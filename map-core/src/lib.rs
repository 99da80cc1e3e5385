//! Everything behind the map that does not need a browser.

pub mod camera;
pub mod config;
pub mod consent;
pub mod error;
pub mod filter;
pub mod focus;
pub mod layer;
pub mod location;
pub mod palette;
pub mod payload;
pub mod viewport;

pub use self::{
    camera::{CameraCommand, CameraDriver, CameraState, CameraTarget},
    config::AppConfig,
    consent::Consent,
    error::{FetchError, GeolocationError, ValidationError},
    filter::{
        all_tags, apply_filter, restrict_to_category, CategoryRows, CategorySelection,
        DisplaySettings, FilterAction, FilterState,
    },
    focus::{Focus, FocusEvent},
    layer::BaseLayer,
    location::{CategoryMap, Location, LocationId, Position},
    payload::decode_locations,
    viewport::{compute_initial_view, BoundingBox, InitialView},
};
