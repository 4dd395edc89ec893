//! Create / update form of a provider.
//!
//! The same screen serves both routes; `NavigationState::is_update` picks
//! the mode. Steps and default values come from `provider_wizard`.

use super::fields::SchemaField;
use crate::domain::provider::api;
use crate::layout::global_context::{AppGlobalContext, NotificationKind};
use crate::shared::components::wizard_stepper::WizardStepper;
use contracts::domain::provider::{provider_payload, provider_wizard, stored_name, ProviderStep};
use contracts::shared::navigation::{routes::PROVIDERS, NavigationState};
use contracts::shared::schema::FieldError;
use contracts::shared::wizard::WizardDefinition;
use leptos::ev::MouseEvent;
use leptos::logging::log;
use leptos::prelude::*;
use serde_json::{json, Value};
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Initial form values. When updating, the known name is filled in; without
/// one the stored document is fetched once the form is shown.
fn initial_form(definition: &WizardDefinition<ProviderStep>, state: &NavigationState) -> Value {
    let mut form = definition.default_values.clone();
    if let Some(name) = state.name.as_deref() {
        form["configuration"]["name"] = json!(name);
    }
    form
}

#[component]
pub fn ProviderWizard(state: NavigationState, tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_update = state.is_update();

    let definition = match provider_wizard(is_update) {
        Ok(definition) => definition,
        Err(e) => {
            log!("❌ provider wizard: {}", e);
            return view! {
                <MessageBar intent=MessageBarIntent::Error>{e.to_string()}</MessageBar>
            }
            .into_any();
        }
    };

    let labels: Vec<&'static str> = definition.steps.iter().map(|s| s.content.label()).collect();
    let step_count = definition.len();
    let form = RwSignal::new(initial_form(&definition, &state));
    let definition = StoredValue::new_local(definition);
    let provider_id = StoredValue::new(state.id.clone());
    let tab_key = StoredValue::new(tab_key);

    if is_update && state.name.is_none() {
        if let Some(id) = state.id.clone() {
            spawn_local(async move {
                match api::fetch_provider(ctx, &id).await {
                    Ok(response) => match stored_name(&response) {
                        Some(name) => {
                            form.try_update(|f| f["configuration"]["name"] = json!(name));
                        }
                        None => log!("⚠️ provider {} has no name", id),
                    },
                    Err(e) => log!("❌ provider {}: {}", id, e),
                }
            });
        }
    }

    let active = RwSignal::new(0usize);
    let show_errors = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let step_errors = move |index: usize| -> Vec<FieldError> {
        form.with(|f| {
            definition.with_value(|d| match d.validate_step(index, f) {
                Ok(Ok(())) => Vec::new(),
                Ok(Err(errors)) => errors,
                Err(e) => vec![FieldError {
                    path: String::new(),
                    message: e.to_string(),
                }],
            })
        })
    };
    let valid = Memo::new(move |_| {
        (0..step_count)
            .map(|index| step_errors(index).is_empty())
            .collect::<Vec<bool>>()
    });
    let active_errors = Signal::derive(move || {
        if show_errors.get() {
            step_errors(active.get())
        } else {
            Vec::new()
        }
    });
    let is_last = move || active.get() + 1 >= step_count;

    let next = move |_: MouseEvent| {
        let index = active.get_untracked();
        if !step_errors(index).is_empty() {
            show_errors.set(true);
            return;
        }
        show_errors.set(false);
        active.set((index + 1).min(step_count.saturating_sub(1)));
    };
    let back = move |_: MouseEvent| {
        show_errors.set(false);
        active.update(|i| *i = i.saturating_sub(1));
    };

    let submit = move |_: MouseEvent| {
        if let Err(errors) = form.with_untracked(|f| definition.with_value(|d| d.validate(f))) {
            log!("⚠️ provider form invalid: {:?}", errors);
            show_errors.set(true);
            return;
        }
        let payload = form.with_untracked(provider_payload);
        submitting.set(true);

        spawn_local(async move {
            let result = match provider_id.get_value() {
                Some(id) => api::update_provider(ctx, &id, &payload).await,
                None => api::create_provider(ctx, &payload).await.map(|_| ()),
            };
            submitting.try_set(false);
            match result {
                Ok(()) => {
                    let verb = if is_update { "updated" } else { "created" };
                    ctx.notify(NotificationKind::Success, format!("Provider {}", verb));
                    ctx.close_tab(&tab_key.get_value());
                    ctx.navigate(&PROVIDERS.path(), NavigationState::default());
                }
                Err(e) => ctx.notify(NotificationKind::Error, e.to_string()),
            }
        });
    };

    let step_view = move || {
        let index = active.get();
        definition.with_value(|d| {
            let Some(step) = d.steps.get(index) else {
                return ().into_any();
            };
            let step_id = step.id;
            let schema = step.schema();
            schema
                .entries()
                .iter()
                .filter_map(|(key, sub)| sub.as_field().map(|field| (key.clone(), field.clone())))
                .map(|(key, field)| {
                    view! {
                        <SchemaField
                            step=step_id
                            key=key
                            field=field
                            form=form
                            errors=active_errors
                        />
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="details-container provider-wizard" data-cy="provider-wizard">
            <WizardStepper labels=labels active=active valid=valid />

            <div class="details-form">{step_view}</div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || active.get() == 0)
                    on_click=back
                >
                    "Back"
                </Button>
                {move || if is_last() {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || submitting.get())
                            on_click=submit
                        >
                            {move || if is_update { "Update" } else { "Create" }}
                        </Button>
                    }
                    .into_any()
                } else {
                    view! {
                        <Button appearance=ButtonAppearance::Primary on_click=next>
                            "Next"
                        </Button>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_form_keeps_name_on_update() {
        let definition = provider_wizard(true).unwrap();
        let state = NavigationState::for_entity("3", "aws-eu");
        let form = initial_form(&definition, &state);

        assert_eq!(form["configuration"]["name"], json!("aws-eu"));
        assert!(form.get("template").is_none());
    }

    #[test]
    fn test_update_opened_by_url_can_submit() {
        let definition = provider_wizard(true).unwrap();
        let state = NavigationState {
            id: Some("3".to_string()),
            ..NavigationState::default()
        };
        let mut form = initial_form(&definition, &state);
        form["connection"]["region"] = json!("eu-west-1");

        assert_eq!(form["configuration"]["name"], json!(""));
        assert_eq!(definition.validate(&form), Ok(()));
        assert!(provider_payload(&form).get("name").is_none());
    }

    #[test]
    fn test_initial_form_on_create_uses_defaults() {
        let definition = provider_wizard(false).unwrap();
        let form = initial_form(&definition, &NavigationState::default());

        assert_eq!(form, definition.default_values);
    }
}
