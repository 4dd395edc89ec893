use crate::layout::center::TabBar;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
fn TabContents() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-content">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| {
                    log!("👶 <For> children function called for: '{}'", tab.key);
                    view! { <TabPage tab=tab tabs_store=tabs_store /> }
                }
            />
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Opens the tab from ?active=... (or the default route) and keeps the URL in sync
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! {
                <TabBar />
                <TabContents />
            }.into_any()
        />
    }
}
