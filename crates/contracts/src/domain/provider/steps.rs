//! Create / update wizard of cloud providers.
//!
//! Steps: `template` (creation only), `configuration`, `connection`.
//! When updating, the provider name cannot change (it is shown read-only and
//! not sent) and stored credentials may be left blank.

use serde_json::{json, Value};

use crate::shared::error::WizardError;
use crate::shared::schema::{FieldSchema, Schema};
use crate::shared::wizard::{StepComposer, WizardDefinition, WizardStep};

/// Supported provider plugins: (id, display name)
pub const PROVIDER_PLUGINS: &[(&str, &str)] = &[
    ("aws", "Amazon Web Services"),
    ("equinix", "Equinix"),
    ("google", "Google Cloud"),
    ("digitalocean", "DigitalOcean"),
    ("vultr", "Vultr"),
];

/// What the UI renders for each step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStep {
    Template,
    Configuration,
    Connection,
}

impl ProviderStep {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Configuration => "configuration",
            Self::Connection => "connection",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Template => "Provider template",
            Self::Configuration => "Configuration",
            Self::Connection => "Connection",
        }
    }
}

fn template_schema() -> Schema {
    Schema::object().field(
        "provider",
        FieldSchema::choice("Provider", PROVIDER_PLUGINS.iter().map(|(id, _)| *id)).required(),
    )
}

fn configuration_schema(is_update: bool) -> Schema {
    Schema::object()
        .field(
            "name",
            FieldSchema::text("Name")
                .required_if(!is_update)
                .length(None, Some(128))
                .read_only(is_update),
        )
        .field("description", FieldSchema::text("Description"))
}

fn connection_schema(is_update: bool) -> Schema {
    Schema::object()
        .field(
            "access_key",
            FieldSchema::text("Access key").required_if(!is_update),
        )
        .field(
            "secret_key",
            FieldSchema::secret("Secret key").required_if(!is_update),
        )
        .field("region", FieldSchema::text("Region").required())
}

pub fn provider_wizard(is_update: bool) -> Result<WizardDefinition<ProviderStep>, WizardError> {
    StepComposer::new(is_update)
        .creation_only(WizardStep::new(
            ProviderStep::Template.id(),
            template_schema,
            ProviderStep::Template,
        ))
        .step(WizardStep::new(
            ProviderStep::Configuration.id(),
            move || configuration_schema(is_update),
            ProviderStep::Configuration,
        ))
        .step(WizardStep::new(
            ProviderStep::Connection.id(),
            move || connection_schema(is_update),
            ProviderStep::Connection,
        ))
        .compose()
}

/// Request body for `POST /api/provider/create` and
/// `PUT /api/provider/update/{id}`. Blank credentials and a blank name are
/// left out so an update keeps the stored ones.
pub fn provider_payload(form: &Value) -> Value {
    let text = |step: &str, key: &str| {
        form.get(step)
            .and_then(|s| s.get(key))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let mut connection = serde_json::Map::new();
    for key in ["access_key", "secret_key", "region"] {
        if let Some(value) = text("connection", key) {
            connection.insert(key.to_string(), json!(value));
        }
    }

    let mut payload = json!({
        "description": text("configuration", "description").unwrap_or_default(),
        "connection": connection,
    });
    if let Some(name) = text("configuration", "name") {
        payload["name"] = json!(name);
    }
    if let Some(provider) = text("template", "provider") {
        payload["provider"] = json!(provider);
    }
    payload
}

/// Name of a stored provider in the `GET /api/provider/{id}` answer.
pub fn stored_name(response: &Value) -> Option<String> {
    response
        .pointer("/data/DOCUMENT/NAME")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_wizard() {
        let wizard = provider_wizard(false).unwrap();
        assert_eq!(wizard.step_ids(), ["template", "configuration", "connection"]);
        assert_eq!(
            wizard.default_values,
            json!({
                "template": { "provider": null },
                "configuration": { "name": "", "description": "" },
                "connection": { "access_key": "", "secret_key": "", "region": "" }
            })
        );
    }

    #[test]
    fn test_update_wizard() {
        let wizard = provider_wizard(true).unwrap();
        assert_eq!(wizard.step_ids(), ["configuration", "connection"]);
        assert_eq!(wizard.steps[0].content, ProviderStep::Configuration);

        let schema = wizard.resolvers();
        let name = schema.get("configuration.name").and_then(Schema::as_field).unwrap();
        assert!(name.read_only);

        let form = json!({
            "configuration": { "name": "aws-eu" },
            "connection": { "region": "eu-west-1" }
        });
        assert_eq!(wizard.validate(&form), Ok(()));
    }

    #[test]
    fn test_update_without_known_name_is_submittable() {
        let wizard = provider_wizard(true).unwrap();
        let mut form = wizard.default_values.clone();
        form["connection"]["region"] = json!("eu-west-1");

        assert_eq!(wizard.validate(&form), Ok(()));
        assert_eq!(
            provider_payload(&form),
            json!({ "description": "", "connection": { "region": "eu-west-1" } })
        );
    }

    #[test]
    fn test_create_still_requires_name() {
        let wizard = provider_wizard(false).unwrap();
        let form = json!({
            "template": { "provider": "aws" },
            "connection": { "access_key": "a", "secret_key": "s", "region": "eu-west-1" }
        });
        let errors = wizard.validate(&form).unwrap_err();
        assert!(errors.iter().any(|e| e.path == "configuration.name"));
    }

    #[test]
    fn test_stored_name() {
        let response = json!({ "data": { "DOCUMENT": { "ID": "3", "NAME": "aws-eu" } } });
        assert_eq!(stored_name(&response), Some("aws-eu".to_string()));
        assert_eq!(stored_name(&json!({ "data": {} })), None);
    }

    #[test]
    fn test_create_requires_credentials() {
        let wizard = provider_wizard(false).unwrap();
        let form = json!({
            "template": { "provider": "aws" },
            "configuration": { "name": "aws-eu" },
            "connection": { "region": "eu-west-1" }
        });
        let errors = wizard.validate_step(2, &form).unwrap().unwrap_err();
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["connection.access_key", "connection.secret_key"]);
    }

    #[test]
    fn test_payload_skips_blank_credentials() {
        let form = json!({
            "configuration": { "name": " aws-eu ", "description": "" },
            "connection": { "access_key": "", "secret_key": "", "region": "eu-west-1" }
        });
        assert_eq!(
            provider_payload(&form),
            json!({
                "name": "aws-eu",
                "description": "",
                "connection": { "region": "eu-west-1" }
            })
        );
    }
}
