use leptos::prelude::*;
use map_core::{
    palette::{category_color, category_hover_color},
    restrict_to_category, CameraTarget, CategoryMap, CategorySelection, DisplaySettings,
    FilterAction, FilterState, FocusEvent,
};

use crate::views::sidebar::{filter_popup::FilterPopup, location_row::LocationRow};

#[component]
pub fn Sidebar(
    data: Signal<CategoryMap>,
    all_tags: Vec<String>,
    filter: Signal<FilterState>,
    on_filter: Callback<FilterAction>,
    on_focus: Callback<FocusEvent>,
    on_camera: Callback<CameraTarget>,
) -> impl IntoView {
    let category = RwSignal::new(CategorySelection::default());
    let display = RwSignal::new(DisplaySettings::default());
    let filter_open = RwSignal::new(false);

    // The chosen category may vanish once the filter changes.
    Effect::new(move |_| {
        let available = data.with(|data| category.with(|category| category.is_available_in(data)));
        if !available {
            data.with_untracked(|data| category.update(|category| category.reconcile(data)));
        }
    });

    let categories = Memo::new(move |_| {
        data.with(|data| data.categories().map(str::to_string).collect::<Vec<_>>())
    });
    let search = move || filter.with(|filter| filter.search().to_string());
    let tag_count = move || filter.with(FilterState::selected_tag_count);

    let rows = move || {
        data.with(|data| {
            let total = data.len();
            category.with(|selection| {
                restrict_to_category(data, selection)
                    .into_iter()
                    .flat_map(|rows| {
                        let background = category_color(rows.index, total);
                        let hover_background = category_hover_color(rows.index, total);
                        rows.locations
                            .iter()
                            .map(|location| {
                                view! {
                                    <LocationRow
                                        location=location.clone()
                                        background=background.clone()
                                        hover_background=hover_background.clone()
                                        display=display.into()
                                        filter
                                        on_filter
                                        on_focus
                                        on_camera
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                    .collect_view()
            })
        })
    };

    view! {
        <div class="sidebar">
            <div class="sidebar-header">
                <select
                    class="category-select"
                    prop:value=move || category.with(|category| category.as_value().to_string())
                    on:change=move |ev| category.set(CategorySelection::from_value(&event_target_value(&ev)))
                >
                    <option value="">"All Categories"</option>
                    <For each=move || categories.get() key=|name| name.clone() let:name>
                        <option value=name.clone()>{name.clone()}</option>
                    </For>
                </select>

                <div class="search-row">
                    <div class="search-field">
                        <input
                            type="text"
                            placeholder="Search locations..."
                            prop:value=search
                            on:input=move |ev| on_filter.run(FilterAction::SetSearch(event_target_value(&ev)))
                        />
                        <Show when=move || !search().is_empty()>
                            <button
                                class="search-clear"
                                aria-label="Clear search"
                                on:click=move |_| on_filter.run(FilterAction::ClearSearch)
                            >
                                "×"
                            </button>
                        </Show>
                    </div>
                    <button
                        class="filter-toggle"
                        class:active=move || { filter_open.get() || tag_count() > 0 }
                        aria-label="Toggle filters"
                        aria-expanded=move || filter_open.get().to_string()
                        on:click=move |_| filter_open.update(|open| *open = !*open)
                    >
                        "Filter"
                        <Show when=move || { tag_count() > 0 }>
                            <span class="filter-badge">{tag_count}</span>
                        </Show>
                    </button>
                    <FilterPopup open=filter_open all_tags display filter on_filter />
                </div>
            </div>

            <div class="sidebar-list">
                <Show
                    when=move || !data.with(CategoryMap::is_empty)
                    fallback=move || {
                        view! {
                            <div class="sidebar-empty">
                                <p>"No locations found"</p>
                                <Show when=move || filter.with(FilterState::is_active)>
                                    <button on:click=move |_| on_filter.run(FilterAction::ClearAll)>
                                        "Clear all filters"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                >
                    {rows}
                </Show>
            </div>
        </div>
    }
}
