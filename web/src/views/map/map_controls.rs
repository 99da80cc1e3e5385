use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::JsRwSignal};
use map_core::{camera::LOCATE_ZOOM, BaseLayer, CameraTarget, Position};

use crate::geolocation;

#[component]
pub fn MapControls(
    map: JsRwSignal<Option<Map>>,
    active_layer: RwSignal<BaseLayer>,
    current_location: WriteSignal<Option<Position>>,
    on_camera: Callback<CameraTarget>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    let zoom_by = move |delta: f64| {
        let Some(map) = map.read_only().get_untracked() else {
            log::warn!("No leaflet map found");
            return;
        };
        map.set_zoom(map.get_zoom() + delta);
    };

    let locate = move |_| {
        geolocation::locate(move |position| {
            log::info!("Device located at {}, {}", position.lat, position.lng);
            current_location.set(Some(position));
            on_camera.run(CameraTarget::new(position, LOCATE_ZOOM));
        });
    };

    view! {
        <div class="map-controls">
            <div class="map-controls-bar">
                <button class="map-control-button" aria-label="Zoom out" on:click=move |_| zoom_by(-1.0)>
                    "−"
                </button>
                <button class="map-control-button" aria-label="Zoom in" on:click=move |_| zoom_by(1.0)>
                    "+"
                </button>
                <div class="map-controls-divider"></div>
                <button
                    class="map-control-button"
                    class:active=move || expanded.get()
                    aria-label="Settings"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| expanded.update(|expanded| *expanded = !*expanded)
                >
                    "⚙"
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="map-settings-panel">
                    <div class="map-settings-section">
                        <div class="map-settings-title">"Map Style"</div>
                        {BaseLayer::ALL
                            .into_iter()
                            .map(|layer| {
                                view! {
                                    <button
                                        class="map-layer-option"
                                        class:active=move || active_layer.get() == layer
                                        on:click=move |_| active_layer.set(layer)
                                    >
                                        <div class="map-layer-name">{layer.label()}</div>
                                        <div class="map-layer-description">{layer.description()}</div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="map-locate-button" on:click=locate>
                        "My Location"
                    </button>
                </div>
            </Show>
        </div>
    }
}
