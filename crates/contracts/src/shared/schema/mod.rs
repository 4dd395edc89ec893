//! Form schema contract
//!
//! A deliberately small validation model used by wizards: objects keyed by
//! name (insertion order kept) with typed leaf fields. It provides the two
//! capabilities the wizard composer relies on:
//!
//! - composition: `Schema::object().field(key, sub_schema)`
//! - default derivation: `schema.default_value()` → plain `serde_json::Value`
//!
//! plus `validate`, which reports every failing field with a dotted path.

mod validation;

pub use validation::ValidationRules;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Object(Vec<(String, Schema)>),
    Field(FieldSchema),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    /// Text rendered as a password input.
    Secret,
    Number,
    Boolean,
    Choice(Vec<String>),
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub kind: FieldKind,
    pub label: String,
    pub default: Option<Value>,
    pub rules: ValidationRules,
    pub read_only: bool,
}

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path from the schema root, e.g. `connection.region`.
    pub path: String,
    pub message: String,
}

impl FieldSchema {
    fn new(kind: FieldKind, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            default: None,
            rules: ValidationRules::none(),
            read_only: false,
        }
    }

    pub fn text(label: &str) -> Self {
        Self::new(FieldKind::Text, label)
    }

    pub fn secret(label: &str) -> Self {
        Self::new(FieldKind::Secret, label)
    }

    pub fn number(label: &str) -> Self {
        Self::new(FieldKind::Number, label)
    }

    pub fn boolean(label: &str) -> Self {
        Self::new(FieldKind::Boolean, label)
    }

    pub fn choice<S: Into<String>>(label: &str, options: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            FieldKind::Choice(options.into_iter().map(Into::into).collect()),
            label,
        )
    }

    pub fn list(label: &str) -> Self {
        Self::new(FieldKind::List, label)
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    /// Makes the field required only when `condition` holds.
    pub fn required_if(mut self, condition: bool) -> Self {
        self.rules.required = condition;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.rules.min_length = min;
        self.rules.max_length = max;
        self
    }

    pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.rules.min = min;
        self.rules.max = max;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn default_value(&self) -> Value {
        if let Some(value) = &self.default {
            return value.clone();
        }
        match self.kind {
            FieldKind::Text | FieldKind::Secret => Value::String(String::new()),
            FieldKind::Boolean => Value::Bool(false),
            FieldKind::List => Value::Array(Vec::new()),
            FieldKind::Number | FieldKind::Choice(_) => Value::Null,
        }
    }

    fn check(&self, value: &Value) -> Result<(), String> {
        let label = self.label.as_str();
        match (&self.kind, value) {
            (FieldKind::Text | FieldKind::Secret, Value::Null) => self.rules.validate_string("", label),
            (FieldKind::Text | FieldKind::Secret, Value::String(s)) => self.rules.validate_string(s, label),

            (FieldKind::Number, Value::Null) if self.rules.required => Err(format!("{} is required", label)),
            (FieldKind::Number, Value::Null) => Ok(()),
            (FieldKind::Number, Value::Number(n)) => {
                let n = n.as_f64().ok_or_else(|| format!("{} is out of range", label))?;
                self.rules.validate_number(n, label)
            }

            (FieldKind::Boolean, Value::Null | Value::Bool(_)) => Ok(()),

            (FieldKind::Choice(_), Value::Null) if self.rules.required => Err(format!("{} is required", label)),
            (FieldKind::Choice(_), Value::Null) => Ok(()),
            (FieldKind::Choice(options), Value::String(s)) => {
                if s.is_empty() {
                    return self.rules.validate_string(s, label);
                }
                if options.iter().any(|o| o == s) {
                    Ok(())
                } else {
                    Err(format!("{} must be one of: {}", label, options.join(", ")))
                }
            }

            (FieldKind::List, Value::Null) if self.rules.required => Err(format!("{} is required", label)),
            (FieldKind::List, Value::Null) => Ok(()),
            (FieldKind::List, Value::Array(items)) => {
                if self.rules.required && items.is_empty() {
                    return Err(format!("{} needs at least one item", label));
                }
                match (self.rules.min_length, self.rules.max_length) {
                    (Some(min), _) if items.len() < min => {
                        Err(format!("{} needs at least {} items", label, min))
                    }
                    (_, Some(max)) if items.len() > max => {
                        Err(format!("{} allows at most {} items", label, max))
                    }
                    _ => Ok(()),
                }
            }

            (kind, _) => Err(format!("{} has the wrong type (expected {:?})", label, kind)),
        }
    }
}

impl From<FieldSchema> for Schema {
    fn from(field: FieldSchema) -> Self {
        Schema::Field(field)
    }
}

impl Schema {
    pub fn object() -> Self {
        Schema::Object(Vec::new())
    }

    /// Adds (or replaces, keeping its position) the sub-schema under `key`.
    /// On a leaf this is a no-op.
    pub fn field(mut self, key: impl Into<String>, schema: impl Into<Schema>) -> Self {
        if let Schema::Object(entries) = &mut self {
            let key = key.into();
            let schema = schema.into();
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = schema,
                None => entries.push((key, schema)),
            }
        }
        self
    }

    pub fn entries(&self) -> &[(String, Schema)] {
        match self {
            Schema::Object(entries) => entries,
            Schema::Field(_) => &[],
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries().iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Looks up a nested schema by dotted path (`"connection.region"`).
    pub fn get(&self, path: &str) -> Option<&Schema> {
        path.split('.').try_fold(self, |schema, key| {
            schema
                .entries()
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, s)| s)
        })
    }

    pub fn as_field(&self) -> Option<&FieldSchema> {
        match self {
            Schema::Field(field) => Some(field),
            Schema::Object(_) => None,
        }
    }

    /// Default values of the whole tree as a plain value.
    pub fn default_value(&self) -> Value {
        match self {
            Schema::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, schema)| (key.clone(), schema.default_value()))
                    .collect::<Map<String, Value>>(),
            ),
            Schema::Field(field) => field.default_value(),
        }
    }

    pub fn validate(&self, value: &Value) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        self.collect_errors("", value, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn collect_errors(&self, path: &str, value: &Value, errors: &mut Vec<FieldError>) {
        match self {
            Schema::Object(entries) => {
                let object = match value {
                    Value::Object(map) => Some(map),
                    Value::Null => None,
                    _ => {
                        errors.push(FieldError {
                            path: path.to_string(),
                            message: "expected an object".to_string(),
                        });
                        return;
                    }
                };
                for (key, schema) in entries {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    let child = object.and_then(|map| map.get(key)).unwrap_or(&Value::Null);
                    schema.collect_errors(&child_path, child, errors);
                }
            }
            Schema::Field(field) => {
                if let Err(message) = field.check(value) {
                    errors.push(FieldError {
                        path: path.to_string(),
                        message,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn connection() -> Schema {
        Schema::object()
            .field("region", FieldSchema::choice("Region", ["eu-west", "us-east"]).required())
            .field("access_key", FieldSchema::secret("Access key").required())
            .field("nodes", FieldSchema::number("Nodes").default(1).range(Some(1.0), Some(16.0)))
    }

    #[test]
    fn test_default_values() {
        let schema = Schema::object()
            .field("connection", connection())
            .field("tags", FieldSchema::list("Tags"));
        assert_eq!(
            schema.default_value(),
            json!({
                "connection": { "region": null, "access_key": "", "nodes": 1 },
                "tags": []
            })
        );
    }

    #[test]
    fn test_field_replaces_in_place() {
        let schema = Schema::object()
            .field("a", FieldSchema::text("A"))
            .field("b", FieldSchema::text("B"))
            .field("a", FieldSchema::boolean("A"));
        assert_eq!(schema.keys(), ["a", "b"]);
        assert_eq!(schema.default_value(), json!({ "a": false, "b": "" }));
    }

    #[test]
    fn test_validate_reports_dotted_paths() {
        let schema = Schema::object().field("connection", connection());
        let errors = schema
            .validate(&json!({ "connection": { "region": "mars", "nodes": 40 } }))
            .unwrap_err();
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            ["connection.region", "connection.access_key", "connection.nodes"]
        );
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let schema = Schema::object().field("connection", connection());
        let form = json!({ "connection": { "region": "eu-west", "access_key": "k", "nodes": 3 } });
        assert_eq!(schema.validate(&form), Ok(()));
    }

    #[test]
    fn test_type_mismatch() {
        let schema = Schema::object().field("name", FieldSchema::text("Name"));
        let errors = schema.validate(&json!({ "name": 5 })).unwrap_err();
        assert_eq!(errors[0].path, "name");
        assert!(errors[0].message.contains("wrong type"));
    }

    #[test]
    fn test_get_nested() {
        let schema = Schema::object().field("connection", connection());
        let region = schema.get("connection.region").and_then(Schema::as_field).unwrap();
        assert_eq!(region.label, "Region");
        assert!(schema.get("connection.zone").is_none());
    }
}
