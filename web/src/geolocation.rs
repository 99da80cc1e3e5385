use map_core::{GeolocationError, Position};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Position as DevicePosition, PositionError};

/// Asks the browser for the device position.
///
/// Fire and forget: `on_found` runs once on success, failures are only
/// logged.
pub fn locate<F>(on_found: F)
where
    F: FnOnce(Position) + 'static,
{
    if let Err(err) = request_position(on_found) {
        log::warn!("Error getting location: {err}");
    }
}

fn request_position<F>(on_found: F) -> Result<(), GeolocationError>
where
    F: FnOnce(Position) + 'static,
{
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let on_success = Closure::once_into_js(move |position: DevicePosition| {
        let coords = position.coords();
        let position = Position::new(coords.latitude(), coords.longitude());
        log::debug!("Device position: {position:?}");
        on_found(position);
    });
    let on_error = Closure::once_into_js(move |error: PositionError| {
        let err = GeolocationError::from_code(error.code(), error.message());
        log::warn!("Error getting location: {err}");
    });

    geolocation
        .get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        )
        .map_err(|err| GeolocationError::Other(format!("{err:?}")))
}
