use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.left_open.get();

    view! {
        <div data-zone="left" class="left" class:left--collapsed=move || !is_open()>
            <button class="left__toggle" aria-label="Toggle menu" on:click=move |_| ctx.toggle_left()>
                {icon("list")}
            </button>
            <div class="left__content" class:hidden=move || !is_open()>
                {children()}
            </div>
        </div>
    }
}
