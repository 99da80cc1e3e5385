use leptos::prelude::*;
use map_core::AppConfig;
use queer_map::app::App;

fn config() -> AppConfig {
    AppConfig::with_overrides(
        option_env!("QUEER_MAP_LOCATIONS_URL"),
        option_env!("QUEER_MAP_BASE_PATH"),
        option_env!("QUEER_MAP_LOG_LEVEL"),
    )
}

fn main() {
    let config = config();
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    log::debug!("Configuration: {config:?}");
    leptos::mount::mount_to_body(move || view! { <App config /> });
}
