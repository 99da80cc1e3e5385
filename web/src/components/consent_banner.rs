use leptos::prelude::*;
use map_core::Consent;
use thaw::{Button, ButtonAppearance};

use crate::storage::{load_consent, store_consent};

/// Asks for cookie consent until the visitor decided once.
#[component]
pub fn ConsentBanner() -> impl IntoView {
    let consent = RwSignal::new(load_consent());

    let decide = move |decision: Consent| {
        store_consent(decision);
        consent.set(Some(decision));
    };

    view! {
        <Show when=move || consent.get().is_none()>
            <div class="consent-banner" role="dialog" aria-live="polite">
                <p>
                    "We use cookies and local storage to remember your settings. "
                    "Map tiles are loaded from third-party providers."
                </p>
                <div class="consent-actions">
                    <Button on_click=move |_| decide(Consent::Rejected)>"Reject"</Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| decide(Consent::Accepted)
                    >
                        "Accept"
                    </Button>
                </div>
            </div>
        </Show>
    }
}
