use leptos::prelude::*;

const WAVES: [(&str, &str); 5] = [
    ("M2 7C2 7 4.5 5 7 5C9.5 5 11 7 13.5 7C16 7 18 5 18 5", "#FF0018"),
    ("M2 10C2 10 4.5 8 7 8C9.5 8 11 10 13.5 10C16 10 18 8 18 8", "#FFA52C"),
    ("M2 13C2 13 4.5 11 7 11C9.5 11 11 13 13.5 13C16 13 18 11 18 11", "#FFFF41"),
    ("M2 16C2 16 4.5 14 7 14C9.5 14 11 16 13.5 16C16 16 18 14 18 14", "#008018"),
    ("M2 19C2 19 4.5 17 7 17C9.5 17 11 19 13.5 19C16 19 18 17 18 17", "#0000F9"),
];

/// The logo as an image source, used where a picture failed to load.
pub fn logo_data_url() -> String {
    let paths: String = WAVES
        .iter()
        .map(|(path, color)| {
            format!("<path d='{path}' stroke='{color}' stroke-width='2' stroke-linecap='round'/>")
        })
        .collect();
    let svg = format!(
        "<svg width='24' height='24' viewBox='0 0 24 24' fill='none' xmlns='http://www.w3.org/2000/svg'>{paths}</svg>"
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

/// Pride flag colors as waves.
#[component]
pub fn Logo(#[prop(default = 40)] size: u32) -> impl IntoView {
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            {WAVES
                .iter()
                .map(|(path, color)| {
                    view! {
                        <path d=*path stroke=*color stroke-width="2" stroke-linecap="round" />
                    }
                })
                .collect_view()}
        </svg>
    }
}
