//! Validation rules for schema fields

/// Constraints of one schema field. Length bounds apply to text and to
/// list sizes, `min`/`max` to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }
        if value.is_empty() {
            return Ok(());
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must be at most {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules {
            required: true,
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("  ", "Name").is_err());
        assert!(rules.validate_string("aws", "Name").is_ok());
    }

    #[test]
    fn test_length_bounds_skip_empty_optional() {
        let rules = ValidationRules {
            min_length: Some(3),
            max_length: Some(5),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("", "Region").is_ok());
        assert_eq!(
            rules.validate_string("ab", "Region").unwrap_err(),
            "Region must be at least 3 characters"
        );
        assert!(rules.validate_string("abcdef", "Region").is_err());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules {
            min: Some(1.0),
            max: Some(10.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(0.0, "Hosts").is_err());
        assert!(rules.validate_number(10.0, "Hosts").is_ok());
    }
}
