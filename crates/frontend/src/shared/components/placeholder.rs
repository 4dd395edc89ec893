use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::{resolve_path, NavigationState, RouteMatch, RouteVariant};
use leptos::prelude::*;
use thaw::*;

/// Generic page for screens the console does not implement yet.
///
/// List screens link to their create form when the resource has one.
#[component]
pub fn ResourcePlaceholder(hit: RouteMatch) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let entry = hit.entry;
    let params: Vec<String> = hit
        .params
        .iter()
        .map(|(k, v)| format!("{} = {}", k, v))
        .collect();
    let create_path = (entry.variant == RouteVariant::List)
        .then(|| resolve_path(entry.group, entry.resource, RouteVariant::Create).ok())
        .flatten();

    view! {
        <div class="placeholder">
            {icon(entry.icon.unwrap_or("empty-page"))}
            <div class="placeholder__title">{entry.resource.label()}</div>
            <div class="placeholder__path">{entry.path()}</div>
            {(!params.is_empty()).then(|| view! {
                <div class="placeholder__params">{params.join(", ")}</div>
            })}
            {create_path.map(|path| view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(&path, NavigationState::default())
                >
                    "Create"
                </Button>
            })}
        </div>
    }
}
