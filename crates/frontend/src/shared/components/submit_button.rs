use leptos::prelude::*;
use thaw::*;

/// Icon button with a pending state.
///
/// While `pending` is true the icon is replaced with a spinner and the
/// button ignores clicks.
#[component]
pub fn SubmitButton(
    /// Tooltip (also the accessible label)
    #[prop(into)]
    tooltip: String,
    /// Icon view
    icon: AnyView,
    #[prop(optional, into)] pending: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Value for `data-cy`
    #[prop(optional, into)]
    test_id: Option<String>,
    on_click: Callback<()>,
) -> impl IntoView {
    let title = tooltip.clone();
    view! {
        <span title=title data-cy=test_id>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                disabled=Signal::derive(move || pending.get() || disabled.get())
                attr:aria-label=tooltip
                on_click=move |_| {
                    if !pending.get_untracked() {
                        on_click.run(());
                    }
                }
            >
                {move || pending.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                <span class:hidden=move || pending.get()>{icon}</span>
            </Button>
        </span>
    }
}
