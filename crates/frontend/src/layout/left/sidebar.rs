//! Sidebar built from the route registry
//!
//! Groups with a single route titled like the group render as one item.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::{list_endpoints, NavigationState, RouteEntry, RouteGroup};
use leptos::prelude::*;

/// Whether the active tab shows `route` (or one of its sub-pages).
fn is_route_active(active: Option<&str>, route: &RouteEntry) -> bool {
    let path = route.path();
    active.is_some_and(|a| a == path || a.starts_with(&format!("{}/", path)))
}

#[component]
fn MenuItem(route: &'static RouteEntry, indent: bool) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let title = route.title(&Default::default(), &NavigationState::default());

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || is_route_active(ctx.active.get().as_deref(), route)
            style:padding-left=if indent { "10px" } else { "12px" }
            on:click=move |_| ctx.navigate(&route.path(), NavigationState::default())
        >
            <div class="app-sidebar__item-content">
                {icon(route.icon.unwrap_or("list"))}
                <span>{title}</span>
            </div>
        </div>
    }
}

#[component]
fn MenuGroup(group: &'static RouteGroup, routes: Vec<&'static RouteEntry>, expanded: RwSignal<Vec<&'static str>>) -> impl IntoView {
    let title = group.title;
    let toggle = move |_| {
        expanded.update(|items| {
            if let Some(pos) = items.iter().position(|x| *x == title) {
                items.remove(pos);
            } else {
                items.push(title);
            }
        });
    };
    let is_expanded = move || expanded.get().contains(&title);
    let routes = StoredValue::new(routes);

    view! {
        <div>
            <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{title}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {routes.get_value().into_iter().map(|route| view! {
                        <MenuItem route=route indent=true />
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let ui = ctx.config().ui;
    let expanded = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            {list_endpoints().iter().filter_map(|group| {
                let visible = ui.is_group_visible(group.title);
                if visible {
                    if let Some(route) = group.as_leaf() {
                        return Some(view! { <MenuItem route=route indent=false /> }.into_any());
                    }
                }
                let routes = group.visible_routes(visible);
                if routes.is_empty() {
                    return None;
                }
                Some(view! { <MenuGroup group=group routes=routes expanded=expanded /> }.into_any())
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::navigation::routes::{VMS, VM_TEMPLATES};

    #[test]
    fn test_route_active_for_sub_pages() {
        assert!(is_route_active(Some("/vm"), &VMS));
        assert!(is_route_active(Some("/vm/42"), &VMS));
        assert!(!is_route_active(Some("/vm-template"), &VMS));
        assert!(is_route_active(Some("/vm-template/create"), &VM_TEMPLATES));
        assert!(!is_route_active(None, &VMS));
    }
}
