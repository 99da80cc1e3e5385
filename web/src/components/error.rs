use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
        </MessageBar>
    }
}

/// Replaces the whole page when loading failed; the only way out is a reload.
#[component]
pub fn FatalErrorView(message: String) -> impl IntoView {
    let reload = move |_| {
        if let Err(err) = window().location().reload() {
            log::error!("Unable to reload page: {err:?}");
        }
    };

    view! {
        <div class="fatal-error">
            <div class="fatal-error-content">
                <ErrorView message=Some(message) />
                <Button appearance=ButtonAppearance::Primary on_click=reload>
                    "Try Again"
                </Button>
            </div>
        </div>
    }
}
