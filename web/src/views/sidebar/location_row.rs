use leptos::prelude::*;
use map_core::{
    CameraTarget, DisplaySettings, FilterAction, FilterState, FocusEvent, Location,
};

use crate::components::logo_data_url;

#[component]
pub fn LocationRow(
    location: Location,
    background: String,
    hover_background: String,
    display: Signal<DisplaySettings>,
    filter: Signal<FilterState>,
    on_filter: Callback<FilterAction>,
    on_focus: Callback<FocusEvent>,
    on_camera: Callback<CameraTarget>,
) -> impl IntoView {
    let position = location.position;
    let select = {
        let location = location.clone();
        move |_| on_focus.run(FocusEvent::Select(location.clone()))
    };
    let Location {
        name,
        description,
        website,
        tags,
        image,
        ..
    } = location;

    let image_failed = RwSignal::new(false);
    let image_src = move || {
        if image_failed.get() {
            logo_data_url()
        } else {
            image.clone()
        }
    };
    let alt = name.clone();

    let description = move || {
        description
            .clone()
            .filter(|_| display.with(|display| display.show_descriptions))
            .map(|description| view! { <p class="location-row-description">{description}</p> })
    };

    let tag_chips = move || {
        let show = display.with(|display| display.show_tags) && !tags.is_empty();
        show.then(|| {
            view! {
                <div class="location-row-tags">
                    {tags
                        .iter()
                        .cloned()
                        .map(|tag| {
                            let selected = {
                                let tag = tag.clone();
                                move || filter.with(|filter| filter.is_tag_selected(&tag))
                            };
                            let toggle = {
                                let tag = tag.clone();
                                move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    on_filter.run(FilterAction::ToggleTag(tag.clone()));
                                }
                            };
                            view! {
                                <button class="tag-chip" class:selected=selected on:click=toggle>
                                    {tag}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    };

    view! {
        <div
            class="location-row"
            style=format!("background: {background}; --hover-bg: {hover_background};")
            on:click=select
        >
            <div class="location-row-header">
                <div class="location-row-image" class:image-fallback=move || image_failed.get()>
                    <img
                        src=image_src
                        alt=alt
                        on:error=move |_| {
                            if !image_failed.get_untracked() {
                                image_failed.set(true);
                            }
                        }
                    />
                </div>
                <div class="location-row-text">
                    <h4>{name}</h4>
                    {description}
                </div>
            </div>

            <div class="location-row-footer">
                {tag_chips}
                <div class="location-row-actions">
                    <button
                        class="location-row-action"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_camera.run(CameraTarget::detail(position));
                        }
                    >
                        "View on map"
                    </button>
                    <a
                        class="location-row-action"
                        href=website
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                    >
                        "Website"
                    </a>
                </div>
            </div>
        </div>
    }
}
