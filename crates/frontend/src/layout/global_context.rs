use contracts::shared::config::ConsoleConfig;
use contracts::shared::navigation::{match_path, NavigationState};
use contracts::shared::selection::SelectionStore;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Selected rows of the active resource list, readable by sibling panes
    pub selection: RwSignal<SelectionStore>,
    pub notifications: RwSignal<Vec<Notification>>,
    config: StoredValue<ConsoleConfig>,
    next_notification: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            selection: RwSignal::new(SelectionStore::new()),
            notifications: RwSignal::new(vec![]),
            config: StoredValue::new(config),
            next_notification: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.get_value()
    }

    /// Full URL of an API path such as `/vm/info/42`.
    pub fn api_url(&self, path: &str) -> String {
        let origin = window()
            .map(|w| {
                let location = w.location();
                let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
                let hostname = location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string());
                format!("{}//{}", protocol, hostname)
            })
            .unwrap_or_default();
        self.config.with_value(|c| c.api.url(&origin, path))
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        // State pushed with the last navigation survives a reload
        let state: NavigationState = window()
            .and_then(|w| w.history().ok())
            .and_then(|h| h.state().ok())
            .and_then(|v| serde_wasm_bindgen::from_value(v).ok())
            .unwrap_or_default();

        let initial = params
            .get("active")
            .cloned()
            .unwrap_or_else(|| self.config.with_value(|c| c.ui.default_route.clone()));
        self.navigate(&initial, state);

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.clone(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let history_state = this
                .opened
                .with_untracked(|tabs| tabs.iter().find(|t| t.key == active_key).map(|t| t.state.clone()))
                .and_then(|state| serde_wasm_bindgen::to_value(&state).ok())
                .unwrap_or(wasm_bindgen::JsValue::NULL);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(&history_state, "", Some(&new_url));
                    }
                }
            }
        });
    }

    /// Opens (or focuses) the tab showing `path`.
    ///
    /// The title comes from the matched route entry, computed with the
    /// path parameters and `state`.
    pub fn navigate(&self, path: &str, state: NavigationState) {
        let Some(hit) = match_path(path) else {
            leptos::logging::log!("⚠️ navigate: no route for '{}'", path);
            self.notify(NotificationKind::Error, format!("Page not found: {}", path));
            return;
        };

        let key = tab_key(path, &state);
        let title = hit.entry.title(&hit.params, &state);
        let description = hit.entry.description(&hit.params, &state);
        leptos::logging::log!("🧭 navigate: '{}' → '{}'", key, title);

        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.clone(),
                title,
                description,
                state,
            };
            self.opened.update(|tabs| {
                tabs.push(tab);
                leptos::logging::log!("✅ Tab added. Total tabs: {}", tabs.len());
            });
        }
        self.activate_tab(&key);
    }

    /// Focuses a tab. The shared selection is dropped when the tab shows
    /// another resource type than the previous one.
    pub fn activate_tab(&self, key: &str) {
        leptos::logging::log!("🔶 activate_tab: key='{}'", key);
        self.selection
            .maybe_update(|store| follow_resource(store, key));
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        self.opened.update(|tabs| {
            tabs.retain(|tab| tab.key != key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Shows a message that disappears after `ui.notification_ms`.
    pub fn notify(&self, kind: NotificationKind, text: impl Into<String>) {
        self.next_notification.update_value(|n| *n += 1);
        let id = self.next_notification.get_value();
        let text = text.into();
        if kind == NotificationKind::Error {
            log::warn!("{}", text);
        }
        self.notifications.update(|list| list.push(Notification { id, kind, text }));

        let ms = self.config.with_value(|c| c.ui.notification_ms);
        let notifications = self.notifications;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(ms).await;
            // the owner may be gone already
            notifications.try_update(|list| list.retain(|n| n.id != id));
        });
    }

    pub fn dismiss_notification(&self, id: u64) {
        self.notifications.update(|list| list.retain(|n| n.id != id));
    }
}

/// Resource type of the route behind a tab key.
pub fn resource_of(key: &str) -> Option<&'static str> {
    match_path(key).map(|hit| hit.entry.resource.name())
}

/// Points the selection store at the resource of `key`. Returns `true` when
/// that changed the store.
pub fn follow_resource(store: &mut SelectionStore, key: &str) -> bool {
    match resource_of(key) {
        Some(resource) if store.active() != Some(resource) => {
            store.reset_for(resource);
            true
        }
        _ => false,
    }
}

/// Tab key: the concrete path, plus the entity id for screens that take it
/// from navigation state (update forms share one path).
pub fn tab_key(path: &str, state: &NavigationState) -> String {
    let path = path.trim_end_matches('/');
    let path = if path.is_empty() { "/" } else { path };
    match &state.id {
        Some(id) if !path.contains('?') => format!("{}?ID={}", path, id),
        _ => path.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    pub description: Option<String>,
    pub state: NavigationState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_key() {
        assert_eq!(tab_key("/vm/42/", &NavigationState::default()), "/vm/42");
        assert_eq!(
            tab_key("/providers/update", &NavigationState::for_entity("3", "aws")),
            "/providers/update?ID=3"
        );
        assert_eq!(tab_key("/", &NavigationState::default()), "/");
    }

    #[test]
    fn test_selection_reset_on_other_resource() {
        let mut store = SelectionStore::new();
        store.publish("vm", &[3, 7]);

        // list and detail of the same resource share the selection
        assert!(!follow_resource(&mut store, "/vm/3"));
        assert_eq!(store.selected("vm"), &[3, 7]);

        assert!(follow_resource(&mut store, "/acl"));
        assert!(store.selected("vm").is_empty());
        assert_eq!(store.active(), Some("acl"));

        assert!(!follow_resource(&mut store, "/no-such-page"));
        assert_eq!(store.active(), Some("acl"));
    }
}
