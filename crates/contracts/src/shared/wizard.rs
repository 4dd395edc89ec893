//! Wizard step composer
//!
//! Builds the ordered step list of a multi-step form together with the
//! combined schema and the initial form values.
//!
//! ```rust,ignore
//! let wizard = StepComposer::new(is_update)
//!     .creation_only(template_step())
//!     .step(configuration_step())
//!     .step(connection_step())
//!     .compose()?;
//! ```

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::error::WizardError;
use super::schema::{FieldError, Schema};

pub type SchemaResolver = Rc<dyn Fn() -> Schema>;

/// One wizard step. `content` is whatever the UI renders for it.
pub struct WizardStep<C> {
    pub id: &'static str,
    pub resolver: SchemaResolver,
    pub content: C,
}

impl<C> WizardStep<C> {
    pub fn new(id: &'static str, resolver: impl Fn() -> Schema + 'static, content: C) -> Self {
        Self {
            id,
            resolver: Rc::new(resolver),
            content,
        }
    }

    pub fn schema(&self) -> Schema {
        (self.resolver)()
    }
}

impl<C: Clone> Clone for WizardStep<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            resolver: Rc::clone(&self.resolver),
            content: self.content.clone(),
        }
    }
}

impl<C> fmt::Debug for WizardStep<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardStep").field("id", &self.id).finish()
    }
}

pub struct StepComposer<C> {
    is_update: bool,
    creation_only: Option<WizardStep<C>>,
    steps: Vec<WizardStep<C>>,
}

impl<C> StepComposer<C> {
    pub fn new(is_update: bool) -> Self {
        Self {
            is_update,
            creation_only: None,
            steps: Vec::new(),
        }
    }

    /// Step shown first when creating and dropped when updating.
    pub fn creation_only(mut self, step: WizardStep<C>) -> Self {
        self.creation_only = Some(step);
        self
    }

    pub fn step(mut self, step: WizardStep<C>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn compose(self) -> Result<WizardDefinition<C>, WizardError> {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        if !self.is_update {
            steps.extend(self.creation_only);
        }
        steps.extend(self.steps);

        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id) {
                return Err(WizardError::DuplicateStepId(step.id.to_string()));
            }
        }

        let mut definition = WizardDefinition {
            steps,
            default_values: Value::Null,
        };
        definition.default_values = definition.resolvers().default_value();
        log::debug!(
            "wizard composed: [{}]",
            definition.step_ids().join(", ")
        );
        Ok(definition)
    }
}

#[derive(Debug)]
pub struct WizardDefinition<C> {
    pub steps: Vec<WizardStep<C>>,
    /// Initial form values, computed once by `compose`.
    pub default_values: Value,
}

impl<C> WizardDefinition<C> {
    /// Object schema keyed by step id. Every resolver is called again on each
    /// invocation.
    pub fn resolvers(&self) -> Schema {
        self.steps
            .iter()
            .fold(Schema::object(), |schema, step| schema.field(step.id, step.schema()))
    }

    pub fn step_ids(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.id).collect()
    }

    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validates the part of `form` that belongs to step `index`.
    /// Error paths are prefixed with the step id.
    pub fn validate_step(&self, index: usize, form: &Value) -> Result<Result<(), Vec<FieldError>>, WizardError> {
        let step = self.steps.get(index).ok_or(WizardError::StepOutOfRange {
            index,
            len: self.steps.len(),
        })?;
        let schema = Schema::object().field(step.id, step.schema());
        Ok(schema.validate(form))
    }

    pub fn validate(&self, form: &Value) -> Result<(), Vec<FieldError>> {
        self.resolvers().validate(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::schema::FieldSchema;
    use serde_json::json;
    use std::cell::Cell;

    fn step(id: &'static str) -> WizardStep<()> {
        WizardStep::new(
            id,
            move || Schema::object().field("name", FieldSchema::text(id).required()),
            (),
        )
    }

    fn provider_like(is_update: bool) -> Result<WizardDefinition<()>, WizardError> {
        StepComposer::new(is_update)
            .creation_only(step("template"))
            .step(step("configuration"))
            .step(step("connection"))
            .compose()
    }

    #[test]
    fn test_create_mode_puts_conditional_step_first() {
        let wizard = provider_like(false).unwrap();
        assert_eq!(wizard.step_ids(), ["template", "configuration", "connection"]);
    }

    #[test]
    fn test_update_mode_drops_conditional_step() {
        let wizard = provider_like(true).unwrap();
        assert_eq!(wizard.step_ids(), ["configuration", "connection"]);
        assert_eq!(wizard.resolvers().keys(), ["configuration", "connection"]);
        assert_eq!(wizard.step_index("template"), None);
    }

    #[test]
    fn test_defaults_match_resolvers() {
        for is_update in [false, true] {
            let wizard = provider_like(is_update).unwrap();
            assert_eq!(wizard.default_values, wizard.resolvers().default_value());
        }
        let wizard = provider_like(false).unwrap();
        assert_eq!(wizard.default_values["template"], json!({ "name": "" }));
    }

    #[test]
    fn test_duplicate_step_id_is_rejected() {
        let err = StepComposer::new(false)
            .step(step("connection"))
            .step(step("connection"))
            .compose()
            .unwrap_err();
        assert_eq!(err, WizardError::DuplicateStepId("connection".to_string()));
    }

    #[test]
    fn test_duplicate_with_dropped_step_is_fine_in_update_mode() {
        let result = StepComposer::new(true)
            .creation_only(step("general"))
            .step(step("general"))
            .compose();
        assert!(result.is_ok());
    }

    #[test]
    fn test_resolvers_are_called_fresh() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let wizard = StepComposer::new(false)
            .step(WizardStep::new(
                "general",
                move || {
                    counter.set(counter.get() + 1);
                    Schema::object()
                },
                (),
            ))
            .compose()
            .unwrap();
        assert_eq!(calls.get(), 1);
        wizard.resolvers();
        wizard.resolvers();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_validate_step() {
        let wizard = provider_like(false).unwrap();
        let form = json!({ "template": { "name": "aws" }, "configuration": { "name": "" } });

        assert_eq!(wizard.validate_step(0, &form), Ok(Ok(())));
        let errors = wizard.validate_step(1, &form).unwrap().unwrap_err();
        assert_eq!(errors[0].path, "configuration.name");
        assert_eq!(
            wizard.validate_step(5, &form),
            Err(WizardError::StepOutOfRange { index: 5, len: 3 })
        );
    }
}
