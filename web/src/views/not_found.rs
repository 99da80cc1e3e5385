use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found-code">"404"</div>
            <h1>"Page Not Found"</h1>
            <p>"This place is not on the map."</p>
            <button
                class="not-found-home"
                on:click=move |_| {
                    navigate("/", Default::default());
                }
            >
                "Back to the map"
            </button>
        </div>
    }
}
