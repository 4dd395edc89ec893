//! Navigation registry
//!
//! Static two-level table (group → routes) mapping every screen of the
//! console to a path and to the metadata menus and headings need.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::navigation::{list_endpoints, match_path, NavigationState};
//!
//! for group in list_endpoints() {
//!     println!("{}", group.title);
//! }
//!
//! let hit = match_path("/vm/42").unwrap();
//! let title = hit.entry.title(&hit.params, &NavigationState::default());
//! ```

mod endpoints;
mod label;
mod matcher;
mod path;
mod resource;
mod route;
mod validate;

pub use endpoints::{all_entries, list_endpoints, route_definitions, ENDPOINTS};
pub use label::{entity_from_state, id_from_params, Label, LabelFn, NavigationState, RouteParams};
pub use matcher::{match_path, RouteMatch};
pub use path::{fill_path, is_registered, resolve_path, PathSpec, RouteGroupKey, RouteVariant, PATHS};
pub use resource::{ResourceKey, ScreenKey};
pub use route::{RouteDefinition, RouteEntry, RouteGroup};
pub use validate::{validate_entries, validate_registry};

/// Individual entries, for code that links to a specific screen.
pub mod routes {
    pub use super::endpoints::*;
}
