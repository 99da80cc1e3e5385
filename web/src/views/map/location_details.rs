use leptos::prelude::*;
use map_core::{
    palette::{detail_gradient, tag_color},
    Focus, FocusEvent, Location,
};

/// Modal with everything known about the open location.
#[component]
pub fn LocationDetails(focus: Signal<Focus>, on_focus: Callback<FocusEvent>) -> impl IntoView {
    let open_location = Memo::new(move |_| focus.with(|focus| focus.open_location().cloned()));

    move || {
        open_location.get().map(|location| {
            view! { <LocationDetailsModal location on_focus /> }
        })
    }
}

#[component]
fn LocationDetailsModal(location: Location, on_focus: Callback<FocusEvent>) -> impl IntoView {
    let has_contact = location.has_contact();
    let Location {
        id,
        name,
        description,
        website,
        tags,
        image,
        address,
        phone,
        email,
        additional_info,
        ..
    } = location;
    let alt = name.clone();

    view! {
        <div class="location-details-overlay" on:click=move |_| on_focus.run(FocusEvent::Close)>
            <div class="location-details-backdrop"></div>
            <div class="location-details-panel" on:click=|ev| ev.stop_propagation()>
                <div class="location-details-header" style:background=detail_gradient(id)>
                    <button
                        class="location-details-close"
                        aria-label="Close"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_focus.run(FocusEvent::Close);
                        }
                    >
                        "×"
                    </button>
                    <div class="location-details-heading">
                        <div class="location-details-image">
                            <img src=image alt=alt />
                        </div>
                        <div>
                            <h2>{name}</h2>
                            {description.map(|description| view! { <p>{description}</p> })}
                        </div>
                    </div>
                </div>

                <div class="location-details-body">
                    {additional_info
                        .map(|info| view! { <p class="location-details-info">{info}</p> })}

                    {has_contact
                        .then(|| {
                            view! {
                                <div class="location-details-section">
                                    <h3>"Contact"</h3>
                                    {phone
                                        .map(|phone| {
                                            view! { <a href=format!("tel:{phone}")>{phone.clone()}</a> }
                                        })}
                                    {email
                                        .map(|email| {
                                            view! { <a href=format!("mailto:{email}")>{email.clone()}</a> }
                                        })}
                                </div>
                            }
                        })}

                    {address
                        .map(|address| {
                            view! {
                                <div class="location-details-section">
                                    <h3>"Address"</h3>
                                    <p>{address}</p>
                                </div>
                            }
                        })}

                    <div class="location-details-footer">
                        <div class="location-details-tags">
                            {tags
                                .into_iter()
                                .enumerate()
                                .map(|(index, tag)| {
                                    let (background, color) = tag_color(index);
                                    view! {
                                        <span class="location-details-tag" style:background-color=background style:color=color>
                                            {tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            class="location-details-website"
                            href=website
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Visit Website"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
