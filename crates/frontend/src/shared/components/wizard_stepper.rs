use crate::shared::icons::icon;
use leptos::prelude::*;

/// Header of a multi-step form. A step can be opened by click only when
/// every step before it is valid.
#[component]
pub fn WizardStepper(
    labels: Vec<&'static str>,
    active: RwSignal<usize>,
    /// Validity of each step, same order as `labels`
    #[prop(into)]
    valid: Signal<Vec<bool>>,
) -> impl IntoView {
    view! {
        <ol class="wizard-stepper">
            {labels.into_iter().enumerate().map(|(index, label)| {
                let reachable = move || valid.with(|v| v.iter().take(index).all(|ok| *ok));
                view! {
                    <li
                        class="wizard-stepper__step"
                        class:wizard-stepper__step--active=move || active.get() == index
                        class:wizard-stepper__step--disabled=move || !reachable()
                        on:click=move |_| {
                            if reachable() {
                                active.set(index);
                            }
                        }
                    >
                        <span class="wizard-stepper__index">
                            {move || {
                                let done = index < active.get() && valid.with(|v| v.get(index).copied().unwrap_or(false));
                                if done { icon("check") } else { view! { <span>{index + 1}</span> }.into_any() }
                            }}
                        </span>
                        <span class="wizard-stepper__label">{label}</span>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}
