//! Error taxonomy of the console.
//!
//! Configuration errors (`NavigationError`, `WizardError`, `ConfigError`) are
//! detected at start-up or at composition time. `LoadError` and `ApiError` are
//! recoverable and stay local to one screen or one row action.

use thiserror::Error;

use super::navigation::{ResourceKey, RouteGroupKey, RouteVariant, ScreenKey};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route registered for {group:?}/{resource:?}/{variant:?}")]
    UnknownRoute {
        group: RouteGroupKey,
        resource: ResourceKey,
        variant: RouteVariant,
    },

    #[error("path '{0}' is registered more than once")]
    DuplicatePath(String),

    #[error("path '{0}' has no parameterless list route for its resource")]
    MissingListSibling(String),

    #[error("entry '{0}' is not present in the path table")]
    Unregistered(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("step id '{0}' is used by more than one step")]
    DuplicateStepId(String),

    #[error("step index {index} is out of range (wizard has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("screen {0:?} has no registered view")]
    NotRegistered(ScreenKey),

    #[error("screen failed to load: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AclParseError {
    #[error("rule is empty")]
    Empty,

    #[error("expected 3 or 4 space separated sections, got {0}")]
    SectionCount(usize),

    #[error("invalid selector '{0}'")]
    Selector(String),

    #[error("unknown resource '{0}'")]
    Resource(String),

    #[error("unknown right '{0}'")]
    Right(String),

    #[error("resource section '{0}' has no '/' separator")]
    MissingSeparator(String),
}
