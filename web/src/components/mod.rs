pub mod consent_banner;
pub mod error;
pub mod loading;
pub mod logo;

// Re-export commonly used types
pub use error::{ErrorView, FatalErrorView};
pub use loading::LoadingView;
pub use logo::{logo_data_url, Logo};
