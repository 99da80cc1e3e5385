use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(
    message: Option<String>,
    /// Cover the whole viewport instead of the parent.
    #[prop(optional)]
    full_screen: bool,
) -> impl IntoView {
    view! {
        <div class="loading-container" class:full-screen=full_screen>
            <Spinner size=SpinnerSize::Large />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading locations...".to_string())}
            </p>
        </div>
    }
}
