use std::borrow::Cow;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use map_core::AppConfig;
use thaw::ConfigProvider;

use crate::{
    components::consent_banner::ConsentBanner,
    views::{map::map_wrapper::LocationExplorer, not_found::NotFound},
};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let AppConfig {
        locations_url,
        base_path,
        ..
    } = config;

    view! {
        <Title text="queer_map"/>

        <ConfigProvider>
            <Router base=Cow::Owned(base_path)>
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route
                            path=StaticSegment("")
                            view=move || view! { <LocationExplorer locations_url=locations_url.clone() /> }
                        />
                    </Routes>
                </main>
            </Router>
            <ConsentBanner />
        </ConfigProvider>
    }
}
