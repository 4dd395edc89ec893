use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Positional parameters extracted from a concrete path (`/vm/42` → `id = 42`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// State attached to a navigation, e.g. the entity an update form edits.
///
/// Serialized with the platform's upper-case keys so it can travel through
/// the browser history untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "NAME", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NavigationState {
    pub fn for_entity(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    /// A present `ID` means the target screen edits an existing entity.
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}

pub type LabelFn = fn(&RouteParams, &NavigationState) -> Option<String>;

/// Title or subtitle of a route: either fixed, or derived from the route
/// parameters and the navigation state.
#[derive(Clone, Copy)]
pub enum Label {
    Constant(&'static str),
    Computed(LabelFn),
}

impl Label {
    /// Evaluates the label. Empty results count as "no label".
    pub fn resolve(&self, params: &RouteParams, state: &NavigationState) -> Option<String> {
        let value = match self {
            Self::Constant(text) => Some(text.to_string()),
            Self::Computed(f) => f(params, state),
        };
        value.filter(|text| !text.trim().is_empty())
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(text) => f.debug_tuple("Constant").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// `#<id>` taken from the `:id` route parameter.
pub fn id_from_params(params: &RouteParams, _: &NavigationState) -> Option<String> {
    params.get("id").map(|id| format!("#{}", id))
}

/// `#<ID> <NAME>` of the entity carried in the navigation state.
pub fn entity_from_state(_: &RouteParams, state: &NavigationState) -> Option<String> {
    let id = state.id.as_deref()?;
    let name = state.name.as_deref().unwrap_or_default();
    Some(format!("#{} {}", id, name).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &RouteParams, _: &NavigationState) -> Option<String> {
        Some("   ".to_string())
    }

    #[test]
    fn test_constant_label() {
        let label = Label::Constant("VMs");
        assert_eq!(
            label.resolve(&RouteParams::new(), &NavigationState::default()).as_deref(),
            Some("VMs")
        );
    }

    #[test]
    fn test_blank_computed_label_is_absent() {
        let label = Label::Computed(never);
        assert_eq!(label.resolve(&RouteParams::new(), &NavigationState::default()), None);
    }

    #[test]
    fn test_id_from_params() {
        let params: RouteParams = [("id", "42")].into_iter().collect();
        let label = Label::Computed(id_from_params);
        assert_eq!(
            label.resolve(&params, &NavigationState::default()).as_deref(),
            Some("#42")
        );
        assert_eq!(label.resolve(&RouteParams::new(), &NavigationState::default()), None);
    }

    #[test]
    fn test_entity_from_state() {
        let label = Label::Computed(entity_from_state);
        let state = NavigationState::for_entity("5", "ubuntu");
        assert_eq!(
            label.resolve(&RouteParams::new(), &state).as_deref(),
            Some("#5 ubuntu")
        );
        assert_eq!(label.resolve(&RouteParams::new(), &NavigationState::default()), None);
    }

    #[test]
    fn test_navigation_state_wire_keys() {
        let state: NavigationState = serde_json::from_str(r#"{"ID":"3","NAME":"web"}"#).unwrap();
        assert!(state.is_update());
        assert_eq!(state.name.as_deref(), Some("web"));
        assert_eq!(serde_json::to_string(&NavigationState::default()).unwrap(), "{}");
    }
}
