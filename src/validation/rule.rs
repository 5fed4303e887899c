//! Validation rules and their default English message templates.

use crate::i18n::format_positional;
use serde::{Deserialize, Serialize};

/// Placeholder standing for the field name in message templates.
pub const FIELD_PLACEHOLDER: &str = "{0}";

/// What a rule checks. Determines the default message template and the
/// values formatted into `{1}`, `{2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    StringLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
    },
    MinLength {
        length: usize,
    },
    MaxLength {
        length: usize,
    },
    Range {
        min: String,
        max: String,
    },
    RegularExpression {
        pattern: String,
    },
    Compare {
        other: String,
    },
    EmailAddress,
    Phone,
    Url,
    CreditCard,
    /// A rule defined outside this crate, carrying its own default template.
    Custom {
        template: String,
    },
}

impl RuleKind {
    /// Default English template for this kind.
    pub fn default_template(&self) -> &str {
        match self {
            RuleKind::Required => "The {0} field is required.",
            RuleKind::StringLength { min: None, .. } => {
                "The field {0} must be a string with a maximum length of {1}."
            }
            RuleKind::StringLength { min: Some(_), .. } => {
                "The field {0} must be a string with a minimum length of {2} and a maximum length of {1}."
            }
            RuleKind::MinLength { .. } => {
                "The field {0} must be a string or array type with a minimum length of '{1}'."
            }
            RuleKind::MaxLength { .. } => {
                "The field {0} must be a string or array type with a maximum length of '{1}'."
            }
            RuleKind::Range { .. } => "The field {0} must be between {1} and {2}.",
            RuleKind::RegularExpression { .. } => {
                "The field {0} must match the regular expression '{1}'."
            }
            RuleKind::Compare { .. } => "'{0}' and '{1}' do not match.",
            RuleKind::EmailAddress => "The {0} field is not a valid e-mail address.",
            RuleKind::Phone => "The {0} field is not a valid phone number.",
            RuleKind::Url => "The {0} field is not a valid fully-qualified http, https, or ftp URL.",
            RuleKind::CreditCard => "The {0} field is not a valid credit card number.",
            RuleKind::Custom { template } => template.as_str(),
        }
    }

    /// Values for the placeholders after `{0}`.
    pub fn parameters(&self) -> Vec<String> {
        match self {
            RuleKind::StringLength { max, min } => {
                let mut params = vec![max.to_string()];
                if let Some(min) = min {
                    params.push(min.to_string());
                }
                params
            }
            RuleKind::MinLength { length } | RuleKind::MaxLength { length } => {
                vec![length.to_string()]
            }
            RuleKind::Range { min, max } => vec![min.clone(), max.clone()],
            RuleKind::RegularExpression { pattern } => vec![pattern.clone()],
            RuleKind::Compare { other } => vec![other.clone()],
            _ => Vec::new(),
        }
    }
}

/// One declarative constraint attached to a model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(flatten)]
    pub kind: RuleKind,

    /// Fixed error message, overriding the default template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Key of an externally stored message resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message_resource_name: Option<String>,
}

impl ValidationRule {
    /// Create a rule of `kind` that uses the kind's default message.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            error_message: None,
            error_message_resource_name: None,
        }
    }

    /// Shorthand for a `RuleKind::Required` rule.
    pub fn required() -> Self {
        Self::new(RuleKind::Required)
    }

    /// Set a fixed error message, replacing the default template.
    ///
    /// The message is used as written as the translation key; it may contain
    /// `{0}` for the field name.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Point the rule at an externally stored message resource.
    ///
    /// A rule with a resource name but no fixed message has nothing to
    /// localize and is rejected by the resolver.
    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.error_message_resource_name = Some(name.into());
        self
    }

    /// True when neither a fixed message nor a resource name overrides the
    /// default template.
    pub fn uses_default_message(&self) -> bool {
        self.error_message.is_none() && self.error_message_resource_name.is_none()
    }

    /// The template `format_error_message` fills: the fixed message if set,
    /// otherwise the kind's default.
    pub fn error_message_template(&self) -> &str {
        self.error_message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_template())
    }

    /// Fill the template with `field_name` and the rule's parameters.
    ///
    /// # Arguments
    /// * `field_name` - The model property being validated (e.g. "UserName")
    ///
    /// # Returns
    /// The source-language message, e.g. "The UserName field is required."
    pub fn format_error_message(&self, field_name: &str) -> String {
        self.format_with_field(field_name)
    }

    /// Fill the template's parameters but keep `{0}` where the field name
    /// would go.
    pub fn parameterized_message(&self) -> String {
        self.format_with_field(FIELD_PLACEHOLDER)
    }

    /// Fill an arbitrary template (e.g. a translation of this rule's
    /// template) with `field` and the rule's parameters.
    pub fn format_template(&self, template: &str, field: &str) -> String {
        let params = self.kind.parameters();
        let mut args: Vec<&str> = Vec::with_capacity(params.len() + 1);
        args.push(field);
        args.extend(params.iter().map(String::as_str));
        format_positional(template, &args)
    }

    fn format_with_field(&self, field: &str) -> String {
        self.format_template(self.error_message_template(), field)
    }
}
