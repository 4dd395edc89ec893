//! TabPage component - wrapper для отображения контента таба
//!
//! Заголовок и подзаголовок берутся из записи маршрута, контент из registry.

use super::registry::render_tab_content;
use super::screens::ScreenRegistry;
use crate::layout::global_context::{resource_of, AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let screens = use_context::<ScreenRegistry>().expect("ScreenRegistry not found");
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || tabs_store.active.get().as_ref() == Some(&tab_key_for_active_check);

    log!("🔨 TabPage CREATED for: '{}'", tab_key);
    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("💥 TabPage DESTROYED for: '{}'", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab, screens);

    // Rows selected in this tab's resource, as published by its list
    let resource = resource_of(&tab.key);
    let selected_count = move || {
        resource
            .map(|r| tabs_store.selection.with(|s| s.selected(r).len()))
            .unwrap_or(0)
    };

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            <div class="page-header">
                <div class="page-header__text">
                    <h1 class="page-header__title">{tab.title.clone()}</h1>
                    {tab.description.clone().map(|d| view! {
                        <div class="page-header__subtitle">{d}</div>
                    })}
                </div>
                <Show when=move || { selected_count() > 0 }>
                    <span class="page-header__selected" data-cy="selected-count">
                        {move || format!("{} selected", selected_count())}
                    </span>
                </Show>
            </div>
            {content}
        </div>
    }
}
