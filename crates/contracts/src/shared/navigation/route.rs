use serde::Serialize;

use super::label::{Label, NavigationState, RouteParams};
use super::path::{RouteGroupKey, RouteVariant};
use super::resource::{ResourceKey, ScreenKey};

/// One navigable screen.
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    /// Path-table group the entry's path belongs to.
    pub group: RouteGroupKey,
    pub resource: ResourceKey,
    pub variant: RouteVariant,
    pub title: Label,
    pub description: Option<Label>,
    pub icon: Option<&'static str>,
    pub sidebar: bool,
    /// Shown even when the owning group would otherwise be hidden.
    pub force_show: bool,
    pub exact: bool,
    pub screen: ScreenKey,
}

impl RouteEntry {
    pub const fn new(
        group: RouteGroupKey,
        resource: ResourceKey,
        variant: RouteVariant,
        title: Label,
        screen: ScreenKey,
    ) -> Self {
        Self {
            group,
            resource,
            variant,
            title,
            description: None,
            icon: None,
            sidebar: false,
            force_show: false,
            exact: true,
            screen,
        }
    }

    /// Sidebar list route titled with the resource label.
    pub const fn list(
        group: RouteGroupKey,
        resource: ResourceKey,
        screen: ScreenKey,
        icon: &'static str,
    ) -> Self {
        Self {
            icon: Some(icon),
            sidebar: true,
            ..Self::new(group, resource, RouteVariant::List, Label::Constant(resource.label()), screen)
        }
    }

    pub const fn described(self, description: Label) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }

    pub const fn forced(self) -> Self {
        Self {
            force_show: true,
            ..self
        }
    }

    /// Templated path, e.g. `/vm/:id`.
    pub fn path(&self) -> String {
        self.variant.build(self.resource)
    }

    pub fn is_parameterized(&self) -> bool {
        self.variant.is_parameterized()
    }

    /// Heading for the route. Falls back to the resource label when a
    /// computed title comes out empty.
    pub fn title(&self, params: &RouteParams, state: &NavigationState) -> String {
        self.title
            .resolve(params, state)
            .unwrap_or_else(|| self.resource.label().to_string())
    }

    pub fn description(&self, params: &RouteParams, state: &NavigationState) -> Option<String> {
        self.description
            .as_ref()
            .and_then(|label| label.resolve(params, state))
    }

    /// Adapts the entry to a router's `{path, component, exact}` shape.
    pub fn definition(&self) -> RouteDefinition {
        RouteDefinition {
            path: self.path(),
            screen: self.screen,
            exact: self.exact,
        }
    }
}

/// Named collection of routes shown together in the navigation.
#[derive(Debug, Clone, Copy)]
pub struct RouteGroup {
    pub key: RouteGroupKey,
    pub title: &'static str,
    pub icon: &'static str,
    pub routes: &'static [&'static RouteEntry],
}

impl RouteGroup {
    pub fn sidebar_routes(&self) -> impl Iterator<Item = &'static RouteEntry> + '_ {
        self.routes.iter().copied().filter(|route| route.sidebar)
    }

    /// A group whose only sidebar route carries the group's own title is
    /// rendered as a single menu item.
    pub fn as_leaf(&self) -> Option<&'static RouteEntry> {
        let mut routes = self.sidebar_routes();
        match (routes.next(), routes.next()) {
            (Some(route), None) if matches!(route.title, Label::Constant(t) if t == self.title) => Some(route),
            _ => None,
        }
    }

    /// Routes the group shows given whether the group itself is visible.
    pub fn visible_routes(&self, group_visible: bool) -> Vec<&'static RouteEntry> {
        self.sidebar_routes()
            .filter(|route| group_visible || route.force_show)
            .collect()
    }
}

/// Router-facing route shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDefinition {
    pub path: String,
    pub screen: ScreenKey,
    pub exact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigation::label::entity_from_state;

    fn create_or_update(_: &RouteParams, state: &NavigationState) -> Option<String> {
        Some(if state.is_update() { "Update VDC" } else { "Create VDC" }.to_string())
    }

    fn blank(_: &RouteParams, _: &NavigationState) -> Option<String> {
        None
    }

    #[test]
    fn test_list_route_shape() {
        let entry = RouteEntry::list(RouteGroupKey::System, ResourceKey::Vdc, ScreenKey::Vdcs, "list");
        assert_eq!(entry.path(), "/virtual-data-center");
        assert!(entry.sidebar);
        assert_eq!(entry.title(&RouteParams::new(), &NavigationState::default()), "VDCs");
        assert_eq!(entry.description(&RouteParams::new(), &NavigationState::default()), None);
    }

    #[test]
    fn test_title_depends_on_navigation_state() {
        let entry = RouteEntry::new(
            RouteGroupKey::System,
            ResourceKey::Vdc,
            RouteVariant::Create,
            Label::Computed(create_or_update),
            ScreenKey::CreateVdc,
        )
        .described(Label::Computed(entity_from_state));

        let params = RouteParams::new();
        assert_eq!(entry.title(&params, &NavigationState::default()), "Create VDC");
        assert_eq!(entry.description(&params, &NavigationState::default()), None);

        let state = NavigationState::for_entity("100", "dev");
        assert_eq!(entry.title(&params, &state), "Update VDC");
        assert_eq!(entry.description(&params, &state).as_deref(), Some("#100 dev"));
    }

    #[test]
    fn test_empty_title_falls_back_to_resource_label() {
        let entry = RouteEntry::new(
            RouteGroupKey::Storage,
            ResourceKey::Image,
            RouteVariant::Create,
            Label::Computed(blank),
            ScreenKey::CreateImage,
        );
        assert_eq!(entry.title(&RouteParams::new(), &NavigationState::default()), "Images");
    }

    #[test]
    fn test_definition() {
        let entry = RouteEntry::new(
            RouteGroupKey::Instance,
            ResourceKey::Vm,
            RouteVariant::Detail,
            Label::Constant("VM"),
            ScreenKey::VirtualMachineDetail,
        );
        assert_eq!(
            entry.definition(),
            RouteDefinition {
                path: "/vm/:id".to_string(),
                screen: ScreenKey::VirtualMachineDetail,
                exact: true,
            }
        );
    }
}
