//! Form inputs generated from a step schema.

use contracts::domain::provider::PROVIDER_PLUGINS;
use contracts::shared::schema::{FieldError, FieldKind, FieldSchema};
use leptos::prelude::*;
use serde_json::{json, Value};

/// Text shown in an input for a form value.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Form value for the raw text of an input.
pub fn parse_input(kind: &FieldKind, raw: &str) -> Value {
    match kind {
        FieldKind::Number => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldKind::Choice(_) if raw.is_empty() => Value::Null,
        FieldKind::List => Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| json!(s))
                .collect(),
        ),
        _ => json!(raw),
    }
}

fn option_label(option: &str) -> String {
    PROVIDER_PLUGINS
        .iter()
        .find(|(id, _)| *id == option)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| option.to_string())
}

/// One input bound to `form[step][key]`.
#[component]
pub fn SchemaField(
    step: &'static str,
    key: String,
    field: FieldSchema,
    form: RwSignal<Value>,
    /// Errors of the whole step; shown when a path matches this field
    #[prop(into)]
    errors: Signal<Vec<FieldError>>,
) -> impl IntoView {
    let path = StoredValue::new(format!("{}.{}", step, key));
    let input_id = format!("{}-{}", step, key);
    let data_cy = input_id.clone();
    let key = StoredValue::new(key);
    let kind = StoredValue::new(field.kind.clone());

    let current = move || {
        form.with(|v| {
            key.with_value(|k| v.get(step).and_then(|s| s.get(k.as_str())).cloned())
                .unwrap_or(Value::Null)
        })
    };
    let write = move |value: Value| {
        form.update(|v| key.with_value(|k| v[step][k.as_str()] = value));
    };
    let message = move || {
        errors.with(|list| {
            list.iter()
                .find(|e| path.with_value(|p| e.path == *p))
                .map(|e| e.message.clone())
        })
    };

    let read_only = field.read_only;
    let required = field.rules.required;
    let input = match field.kind.clone() {
        FieldKind::Boolean => view! {
            <input
                type="checkbox"
                id=input_id.clone()
                data-cy=data_cy
                disabled=read_only
                prop:checked=move || current().as_bool().unwrap_or(false)
                on:change=move |ev| write(Value::Bool(event_target_checked(&ev)))
            />
        }
        .into_any(),
        FieldKind::Choice(options) => view! {
            <select
                id=input_id.clone()
                data-cy=data_cy
                disabled=read_only
                prop:value=move || display_value(&current())
                on:change=move |ev| write(kind.with_value(|k| parse_input(k, &event_target_value(&ev))))
            >
                <option value="">"-"</option>
                {options.into_iter().map(|option| {
                    let label = option_label(&option);
                    view! { <option value=option>{label}</option> }
                }).collect_view()}
            </select>
        }
        .into_any(),
        other => {
            let input_type = match other {
                FieldKind::Secret => "password",
                FieldKind::Number => "number",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    id=input_id.clone()
                    data-cy=data_cy
                    disabled=read_only
                    maxlength=field.rules.max_length.map(|n| n.to_string())
                    prop:value=move || display_value(&current())
                    on:input=move |ev| write(kind.with_value(|k| parse_input(k, &event_target_value(&ev))))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group" class:form-group--invalid=move || message().is_some()>
            <label for=input_id>
                {field.label.clone()}
                {required.then(|| view! { <span class="form-group__required">"*"</span> })}
            </label>
            {input}
            {move || message().map(|m| view! { <div class="form-group__error">{m}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_by_kind() {
        assert_eq!(parse_input(&FieldKind::Text, "eu-west"), json!("eu-west"));
        assert_eq!(parse_input(&FieldKind::Number, " 4 "), json!(4.0));
        assert_eq!(parse_input(&FieldKind::Number, "four"), Value::Null);
        assert_eq!(parse_input(&FieldKind::Choice(vec!["aws".into()]), ""), Value::Null);
        assert_eq!(parse_input(&FieldKind::List, "a, ,b"), json!(["a", "b"]));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!("aws")), "aws");
        assert_eq!(display_value(&json!(["a", "b"])), "a, b");
        assert_eq!(display_value(&json!(2)), "2");
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label("aws"), "Amazon Web Services");
        assert_eq!(option_label("custom"), "custom");
    }
}
