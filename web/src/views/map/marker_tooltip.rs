use leptos::prelude::*;
use map_core::{FocusEvent, Location, LocationId};

fn tooltip_dom_id(id: LocationId) -> String {
    format!("marker-tooltip-{id}")
}

/// `true` while the pointer rests on the tooltip of marker `id`.
pub fn is_tooltip_hovered(id: LocationId) -> bool {
    document()
        .get_element_by_id(&tooltip_dom_id(id))
        .and_then(|element| element.matches(":hover").ok())
        .unwrap_or(false)
}

/// Preview shown above a hovered marker.
#[component]
pub fn MarkerTooltip(location: Location, on_focus: Callback<FocusEvent>) -> impl IntoView {
    let id = location.id;
    let position = location.position;
    let name = location.name.clone();
    let image = location.image.clone();
    let description = location.description.clone();

    view! {
        <div
            id=tooltip_dom_id(id)
            class="marker-tooltip"
            on:click=move |ev| {
                ev.stop_propagation();
                on_focus.run(FocusEvent::Select(location.clone()));
            }
            on:mouseleave=move |_| on_focus.run(FocusEvent::MarkerLeave { id, position })
        >
            <div class="marker-tooltip-image">
                <img src=image alt=name.clone() />
            </div>
            <h3 class="marker-tooltip-name">{name}</h3>
            {description
                .map(|description| {
                    view! { <p class="marker-tooltip-description">{description}</p> }
                })}
            <div class="marker-tooltip-hint">"Click for more details"</div>
        </div>
    }
}
