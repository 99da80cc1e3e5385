use std::time::Duration;

use leptos::prelude::*;
use leptos_leaflet::{
    leaflet::{FitBoundsOptions, Map, Point},
    prelude::*,
};
use map_core::{
    BaseLayer, BoundingBox, CameraCommand, CameraDriver, CameraState, CameraTarget, Focus,
    FocusEvent, Location, Position,
};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::views::map::{
    location_details::LocationDetails,
    map_controls::MapControls,
    map_marker::MapMarker,
    util::{
        current_location_icon_url, marker_icon_url, to_lat_lng, to_lat_lng_bounds,
        to_marker_position, CURRENT_LOCATION_ICON_ANCHOR, MARKER_ICON_SIZE,
    },
};

/// Time the sidebar transition needs before the map may measure itself again.
const SIDEBAR_TRANSITION: Duration = Duration::from_millis(300);

fn apply_command(map: &Map, command: CameraCommand) {
    log::debug!("Camera command: {command:?}");
    match command {
        CameraCommand::FitBounds { bounds, padding } => {
            let options = FitBoundsOptions::new();
            options.set_padding(Point::new(padding, padding));
            map.fit_bounds_with_options(&to_lat_lng_bounds(&bounds), &options);
        }
        CameraCommand::FlyTo(CameraTarget { center, zoom }) => {
            map.fly_to(&to_lat_lng(center), zoom);
        }
        CameraCommand::SetView(CameraTarget { center, zoom }) => {
            map.set_view(&to_lat_lng(center), zoom);
        }
    }
}

#[component]
pub fn MapRenderer(
    markers: Signal<Vec<Location>>,
    initial_bounds: Option<BoundingBox>,
    camera: Signal<CameraState>,
    focus: Signal<Focus>,
    on_focus: Callback<FocusEvent>,
    on_camera: Callback<CameraTarget>,
    sidebar_collapsed: Signal<bool>,
) -> impl IntoView {
    let map = JsRwSignal::new_local(None::<Map>);
    let active_layer = RwSignal::new(BaseLayer::default());
    let current_location = RwSignal::new(None::<Position>);
    let driver = StoredValue::new(CameraDriver::new());
    let initial = camera.get_untracked();

    // Background clicks drop the hover state.
    Effect::new(move |registered: Option<bool>| {
        if registered == Some(true) {
            return true;
        }
        let Some(map_instance) = map.read_only().get() else {
            return false;
        };
        let on_click = Closure::wrap(
            Box::new(move || on_focus.run(FocusEvent::MapClick)) as Box<dyn FnMut()>
        );
        map_instance.on("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
        true
    });

    Effect::new(move |_| {
        let state = camera.get();
        let Some(map_instance) = map.read_only().get() else {
            return;
        };
        let command = driver
            .try_update_value(|driver| driver.next_command(&state, initial_bounds))
            .flatten();
        if let Some(command) = command {
            apply_command(&map_instance, command);
        }
    });

    Effect::new(move |previous: Option<bool>| {
        let collapsed = sidebar_collapsed.get();
        if previous.is_some() {
            set_timeout(
                move || {
                    let Some(map_instance) = map.read_only().get_untracked() else {
                        return;
                    };
                    map_instance.invalidate_size(true);
                    let state = camera.get_untracked();
                    if let Some(command) = driver.with_value(|driver| driver.resize_command(&state)) {
                        apply_command(&map_instance, command);
                    }
                },
                SIDEBAR_TRANSITION,
            );
        }
        collapsed
    });

    view! {
        <div class="map-renderer-container">
            <MapContainer
                class="map-renderer-map-container"
                center=to_marker_position(initial.center)
                zoom=initial.zoom
                set_view=true
                zoom_control=false
                map=map.write_only()
            >
                {move || {
                    let layer = active_layer.get();
                    view! {
                        <TileLayer
                            url=layer.tile_url()
                            attribution=layer.attribution()
                            max_zoom=layer.max_zoom()
                        />
                    }
                }}

                {move || {
                    current_location
                        .get()
                        .map(|position| {
                            view! {
                                <Marker
                                    position=to_marker_position(position)
                                    icon_url=Some(current_location_icon_url())
                                    icon_size=Some(MARKER_ICON_SIZE)
                                    icon_anchor=Some(CURRENT_LOCATION_ICON_ANCHOR)
                                >
                                    <Tooltip permanent=true direction="top".to_string()>
                                        <div class="current-location-tooltip">"Your Location"</div>
                                    </Tooltip>
                                </Marker>
                            }
                        })
                }}

                {move || {
                    let icon_url = marker_icon_url(active_layer.get().marker_color());
                    markers
                        .get()
                        .into_iter()
                        .map(|location| {
                            view! {
                                <MapMarker location icon_url=icon_url.clone() focus on_focus />
                            }
                        })
                        .collect_view()
                }}
            </MapContainer>

            <MapControls map active_layer current_location=current_location.write_only() on_camera />
            <LocationDetails focus on_focus />
        </div>
    }
}
