//! Tab content registry: tab.key (a concrete path) → View
//!
//! The key is matched against the route registry; the entry's screen is
//! resolved through [`ScreenRegistry`].

use super::screens::{ScreenProps, ScreenRegistry};
use crate::layout::global_context::Tab as TabData;
use crate::shared::icons::icon;
use contracts::shared::navigation::match_path;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
fn LoadFailed(error: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-failed">
            <MessageBar intent=MessageBarIntent::Error>
                {icon("alert")}
                <span>{error}</span>
            </MessageBar>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_retry.run(())>
                "Retry"
            </Button>
        </div>
    }
}

/// Рендерит контент таба по его ключу.
pub fn render_tab_content(tab: &TabData, screens: ScreenRegistry) -> AnyView {
    let Some(hit) = match_path(&tab.key) else {
        log!("⚠️ Unknown tab key: {}", tab.key);
        return view! { <div class="placeholder">{"Page not found"}</div> }.into_any();
    };

    let screen = hit.entry.screen;
    let props = ScreenProps {
        hit,
        state: tab.state.clone(),
        tab_key: tab.key.clone(),
    };
    let attempt = RwSignal::new(0u32);

    view! {
        {move || {
            attempt.track();
            match screens.load(screen) {
                Ok(render) => render(props.clone()),
                Err(e) => view! {
                    <LoadFailed
                        error=e.to_string()
                        on_retry=Callback::new(move |_| {
                            screens.retry(screen);
                            attempt.update(|n| *n += 1);
                        })
                    />
                }
                .into_any(),
            }
        }}
    }
    .into_any()
}
