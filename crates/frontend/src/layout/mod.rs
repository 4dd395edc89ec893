pub mod center;
pub mod global_context;
pub mod left;
pub mod notifications;
pub mod tabs;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |  Tab bar                     |
/// |  (Left)   +------------------------------+
/// |           |  Active tab content          |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>

            <notifications::Notifications />
        </div>
    }
}
