use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use map_core::{Focus, FocusEvent, Location};

use crate::views::map::{
    marker_tooltip::{is_tooltip_hovered, MarkerTooltip},
    util::{to_marker_position, MARKER_ICON_ANCHOR, MARKER_ICON_SIZE},
};

#[component]
pub fn MapMarker(
    location: Location,
    icon_url: String,
    focus: Signal<Focus>,
    on_focus: Callback<FocusEvent>,
) -> impl IntoView {
    let id = location.id;
    let position = location.position;

    let mouse_events = MouseEvents::new()
        .on_click({
            let location = location.clone();
            move |_| on_focus.run(FocusEvent::Select(location.clone()))
        })
        .on_mouse_over(move |_| on_focus.run(FocusEvent::MarkerEnter(id)))
        .on_mouse_out(move |_| {
            // Moving onto the tooltip must not close it.
            if !is_tooltip_hovered(id) {
                on_focus.run(FocusEvent::MarkerLeave { id, position });
            }
        });

    let location = StoredValue::new(location);
    let show_tooltip = Memo::new(move |_| focus.with(|focus| focus.tooltip_marker() == Some(id)));

    view! {
        <Marker
            position=to_marker_position(position)
            draggable=false
            icon_url=Some(icon_url)
            icon_size=Some(MARKER_ICON_SIZE)
            icon_anchor=Some(MARKER_ICON_ANCHOR)
            mouse_events
        >
            <Show when=move || show_tooltip.get()>
                <Tooltip permanent=true direction="top".to_string()>
                    <MarkerTooltip location=location.get_value() on_focus />
                </Tooltip>
            </Show>
        </Marker>
    }
}
