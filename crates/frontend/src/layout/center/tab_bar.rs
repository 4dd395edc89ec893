use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(key.get_value().as_str()));

    let on_click = move |_| ctx.activate_tab(&key.get_value());
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key.get_value());
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=tab.key.clone()>
            <span>{tab.title}</span>
            <button class="tab-close" aria-label="Close" on:click=on_close>"×"</button>
        </div>
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-bar">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabHandle tab=tab /> }
            />
        </div>
    }
}
