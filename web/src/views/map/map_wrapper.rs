use leptos::prelude::*;
use map_core::{
    all_tags, compute_initial_view, CameraState, CameraTarget, CategoryMap, FilterAction,
    FilterState, Focus, FocusEvent, Location,
};

use crate::{
    api::fetch_locations,
    components::{FatalErrorView, LoadingView, Logo},
    views::{map::map_renderer::MapRenderer, sidebar::sidebar::Sidebar},
};

/// Loads the locations once and shows them on the map and in the sidebar.
#[component]
pub fn LocationExplorer(locations_url: String) -> impl IntoView {
    let locations = LocalResource::new(move || {
        let url = locations_url.clone();
        async move { fetch_locations(&url).await }
    });

    move || match locations.get() {
        None => view! { <LoadingView message=None full_screen=true /> }.into_any(),
        Some(result) => match result.as_ref() {
            Ok(data) => view! { <Explorer data=data.clone() /> }.into_any(),
            Err(err) => view! { <FatalErrorView message=err.to_string() /> }.into_any(),
        },
    }
}

#[component]
fn Explorer(data: CategoryMap) -> impl IntoView {
    let initial_view = compute_initial_view(data.locations());
    let tags = all_tags(&data);
    let data = StoredValue::new(data);

    let filter = RwSignal::new(FilterState::new());
    let camera = RwSignal::new(CameraState::new(&initial_view));
    let focus = RwSignal::new(Focus::default());
    let sidebar_collapsed = RwSignal::new(false);

    let filtered = Memo::new(move |_| filter.with(|filter| data.with_value(|data| filter.apply(data))));
    let markers = Signal::derive(move || {
        filtered.with(|filtered| filtered.locations().cloned().collect::<Vec<Location>>())
    });

    let on_filter = Callback::new(move |action: FilterAction| {
        filter.update(|filter| filter.dispatch(action));
    });

    let on_camera = Callback::new(move |target: CameraTarget| {
        camera.update(|camera| camera.fly_to(target));
    });

    let on_focus = Callback::new(move |event: FocusEvent| {
        let state = camera.get_untracked();
        let mut target = None;
        focus.maybe_update(|focus| {
            let before = focus.clone();
            target = focus.apply(event, &state);
            *focus != before
        });
        if let Some(target) = target {
            on_camera.run(target);
        }
    });

    let toggle_sidebar = move |_| sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);

    view! {
        <div class="explorer">
            <div class="control-panel">
                <div class="brand">
                    <Logo size=40 />
                    <span class="brand-name">"queer_map"</span>
                </div>

                <div class="sidebar-container" class:collapsed=move || sidebar_collapsed.get()>
                    <Sidebar
                        data=filtered.into()
                        all_tags=tags
                        filter=filter.into()
                        on_filter
                        on_focus
                        on_camera
                    />
                </div>

                <div class="panel-controls">
                    <button class="sidebar-toggle" on:click=toggle_sidebar>
                        <span class="chevron" class:flipped=move || sidebar_collapsed.get()>
                            "‹"
                        </span>
                        <span>
                            {move || {
                                if sidebar_collapsed.get() { "Show Sidebar" } else { "Hide Sidebar" }
                            }}
                        </span>
                    </button>
                </div>
            </div>

            <div class="map-area">
                <MapRenderer
                    markers
                    initial_bounds=initial_view.bounds
                    camera=camera.into()
                    focus=focus.into()
                    on_focus
                    on_camera
                    sidebar_collapsed=sidebar_collapsed.into()
                />
            </div>
        </div>
    }
}
