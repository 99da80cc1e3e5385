use leptos::prelude::*;
use map_core::{DisplaySettings, FilterAction, FilterState};

#[component]
fn SettingSwitch(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="setting-switch">
            <span>{label}</span>
            <button
                role="switch"
                class="switch"
                class:on=move || checked.get()
                aria-checked=move || checked.get().to_string()
                on:click=move |_| on_toggle.run(())
            >
                <span class="switch-knob"></span>
            </button>
        </label>
    }
}

/// Display settings and the tag filter. Clicking next to it closes it.
#[component]
pub fn FilterPopup(
    open: RwSignal<bool>,
    all_tags: Vec<String>,
    display: RwSignal<DisplaySettings>,
    filter: Signal<FilterState>,
    on_filter: Callback<FilterAction>,
) -> impl IntoView {
    let tags = all_tags
        .into_iter()
        .map(|tag| {
            let selected = {
                let tag = tag.clone();
                move || filter.with(|filter| filter.is_tag_selected(&tag))
            };
            let toggle = {
                let tag = tag.clone();
                move |_| on_filter.run(FilterAction::ToggleTag(tag.clone()))
            };
            view! {
                <button class="tag-chip" class:selected=selected on:click=toggle>
                    {tag}
                </button>
            }
        })
        .collect_view();

    view! {
        <Show when=move || open.get()>
            <div class="filter-backdrop" on:click=move |_| open.set(false)></div>
        </Show>
        <div class="filter-popup" class:hidden=move || !open.get()>
            <div class="filter-section">
                <h3>"Display Settings"</h3>
                <SettingSwitch
                    label="Show descriptions"
                    checked=Signal::derive(move || display.get().show_descriptions)
                    on_toggle=move || {
                        display.update(|display| display.show_descriptions = !display.show_descriptions)
                    }
                />
                <SettingSwitch
                    label="Show tags"
                    checked=Signal::derive(move || display.get().show_tags)
                    on_toggle=move || display.update(|display| display.show_tags = !display.show_tags)
                />
            </div>

            <div class="filter-divider"></div>

            <div class="filter-section">
                <div class="filter-section-header">
                    <h3>"Filter by Tags"</h3>
                    <button class="filter-clear" on:click=move |_| on_filter.run(FilterAction::ClearTags)>
                        "Clear all"
                    </button>
                </div>
                <div class="filter-tags">{tags}</div>
            </div>
        </div>
    }
}
