pub mod steps;

pub use steps::{provider_payload, provider_wizard, stored_name, ProviderStep, PROVIDER_PLUGINS};
