//! Lazy screen resolution
//!
//! Every `ScreenKey` owns one [`LazySlot`]. A slot is resolved the first time
//! a tab needs its screen and cached afterwards; a failure stays local to
//! that screen until retried. The resolver is a plain fn so another one can
//! be swapped in.

use crate::domain::acl::ui::list::AclList;
use crate::domain::provider::ui::wizard::ProviderWizard;
use crate::domain::vm::ui::details::VmDetailPage;
use crate::domain::vm::ui::list::VirtualMachines;
use crate::shared::components::placeholder::ResourcePlaceholder;
use contracts::shared::error::LoadError;
use contracts::shared::lazy::LazySlot;
use contracts::shared::navigation::{NavigationState, RouteMatch, ScreenKey};
use leptos::logging::log;
use leptos::prelude::*;
use std::collections::HashMap;

/// Everything a screen gets from the tab that shows it.
#[derive(Clone)]
pub struct ScreenProps {
    pub hit: RouteMatch,
    pub state: NavigationState,
    pub tab_key: String,
}

pub type ScreenView = fn(ScreenProps) -> AnyView;

fn vm_list(_: ScreenProps) -> AnyView {
    view! { <VirtualMachines /> }.into_any()
}

fn vm_detail(props: ScreenProps) -> AnyView {
    match props.hit.params.get("id").and_then(|id| id.parse::<u64>().ok()) {
        Some(id) => view! { <VmDetailPage id=id /> }.into_any(),
        None => placeholder(props),
    }
}

/// Create and update share the form; the edit route carries the id in the path.
fn provider_form(props: ScreenProps) -> AnyView {
    let mut state = props.state;
    if state.id.is_none() {
        state.id = props.hit.params.get("id").map(str::to_string);
    }
    view! { <ProviderWizard state=state tab_key=props.tab_key /> }.into_any()
}

fn acl_list(_: ScreenProps) -> AnyView {
    view! { <AclList /> }.into_any()
}

fn placeholder(props: ScreenProps) -> AnyView {
    view! { <ResourcePlaceholder hit=props.hit /> }.into_any()
}

fn resolve(screen: ScreenKey) -> Result<ScreenView, LoadError> {
    log!("📦 resolving screen {:?}", screen);
    let view: ScreenView = match screen {
        ScreenKey::VirtualMachines => vm_list,
        ScreenKey::VirtualMachineDetail => vm_detail,
        ScreenKey::CreateProvider => provider_form,
        ScreenKey::Acls => acl_list,
        _ => placeholder,
    };
    Ok(view)
}

pub type Resolver = fn(ScreenKey) -> Result<ScreenView, LoadError>;

/// One slot per screen plus the resolver that fills them.
pub struct ScreenSlots {
    resolver: Resolver,
    slots: HashMap<ScreenKey, LazySlot<ScreenView>>,
}

impl ScreenSlots {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            slots: HashMap::new(),
        }
    }

    fn slot(&mut self, screen: ScreenKey) -> &LazySlot<ScreenView> {
        self.slots.entry(screen).or_default()
    }

    pub fn load(&mut self, screen: ScreenKey) -> Result<ScreenView, LoadError> {
        let resolver = self.resolver;
        self.slot(screen).get_or_load(|| resolver(screen))
    }

    pub fn retry(&mut self, screen: ScreenKey) {
        self.slot(screen).retry();
    }
}

#[derive(Clone, Copy)]
pub struct ScreenRegistry {
    slots: StoredValue<ScreenSlots, LocalStorage>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::with_resolver(resolve)
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        Self {
            slots: StoredValue::new_local(ScreenSlots::new(resolver)),
        }
    }

    pub fn load(&self, screen: ScreenKey) -> Result<ScreenView, LoadError> {
        self.slots
            .try_update_value(|slots| slots.load(screen))
            .unwrap_or_else(|| Err(LoadError::Failed("screen registry is disposed".to_string())))
    }

    pub fn retry(&self, screen: ScreenKey) {
        log!("🔁 retry screen {:?}", screen);
        self.slots.update_value(|slots| slots.retry(screen));
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static BROKEN: Cell<bool> = const { Cell::new(true) };
    }

    fn flaky(screen: ScreenKey) -> Result<ScreenView, LoadError> {
        if BROKEN.with(Cell::get) {
            Err(LoadError::Failed(format!("{:?} chunk missing", screen)))
        } else {
            Ok(placeholder as ScreenView)
        }
    }

    #[test]
    fn test_failed_screen_recovers_after_retry() {
        let mut slots = ScreenSlots::new(flaky);

        assert!(slots.load(ScreenKey::Acls).is_err());
        BROKEN.with(|b| b.set(false));
        // the failure is cached until retried
        assert!(slots.load(ScreenKey::Acls).is_err());
        // siblings are not affected
        assert!(slots.load(ScreenKey::VirtualMachines).is_ok());

        slots.retry(ScreenKey::Acls);
        assert!(slots.load(ScreenKey::Acls).is_ok());
    }

    #[test]
    fn test_default_resolver_knows_every_screen() {
        let mut slots = ScreenSlots::new(resolve);
        for screen in [
            ScreenKey::VirtualMachines,
            ScreenKey::VirtualMachineDetail,
            ScreenKey::CreateProvider,
            ScreenKey::Acls,
        ] {
            assert!(slots.load(screen).is_ok());
        }
    }
}
