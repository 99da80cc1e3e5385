// build.rs
const SETTINGS: [&str; 3] = [
    "QUEER_MAP_LOCATIONS_URL",
    "QUEER_MAP_BASE_PATH",
    "QUEER_MAP_LOG_LEVEL",
];

fn main() {
    // Load .env from web/ or the workspace root for local development
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    // Bake the settings into the bundle, there is no runtime environment in the browser
    for key in SETTINGS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
