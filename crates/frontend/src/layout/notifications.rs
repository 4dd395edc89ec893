use crate::layout::global_context::{AppGlobalContext, NotificationKind};
use leptos::prelude::*;
use thaw::*;

/// Non-blocking messages (failed refreshes, saved forms, ...).
#[component]
pub fn Notifications() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="notifications">
            <For
                each=move || ctx.notifications.get()
                key=|n| n.id
                children=move |n| {
                    let intent = match n.kind {
                        NotificationKind::Info => MessageBarIntent::Info,
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };
                    let id = n.id;
                    view! {
                        <div class="notifications__item" on:click=move |_| ctx.dismiss_notification(id)>
                            <MessageBar intent=intent>{n.text}</MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
