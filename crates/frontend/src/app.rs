use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::screens::ScreenRegistry;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(load_config()));

    // One lazy slot per screen; nothing is resolved until a tab needs it
    provide_context(ScreenRegistry::new());

    view! {
        <AppRoutes />
    }
}
