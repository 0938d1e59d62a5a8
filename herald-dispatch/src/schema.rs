//! Parameter schema value objects.
//!
//! Each action publishes a schema describing the parameters it accepts, so
//! the rule engine can render configuration forms and validate shape before
//! invoking `execute`. This replaces the original annotation-driven context
//! definitions with an explicit value object.

use serde::{Deserialize, Serialize};

/// The value type of one parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Single-line string.
    String,

    /// Multi-line text.
    Text,

    /// Email address.
    Email,

    /// Role identifier.
    Role,

    /// Language/locale code.
    Language,
}

/// Description of one action parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Machine-readable parameter id.
    pub id: String,

    /// Human-readable label.
    pub label: String,

    /// Help text shown alongside the parameter.
    pub description: String,

    /// The value type.
    pub kind: ParameterKind,

    /// Whether the parameter must be supplied.
    pub required: bool,

    /// Whether the parameter accepts multiple values.
    pub multiple: bool,
}

impl ParameterSpec {
    /// Create a required, single-valued parameter.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            kind,
            required: true,
            multiple: false,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the parameter optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Mark the parameter multi-valued.
    #[must_use]
    pub const fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }
}

/// Ordered set of parameter descriptions for one action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    parameters: Vec<ParameterSpec>,
}

impl ParameterSchema {
    /// Start an empty schema.
    #[must_use]
    pub const fn builder() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Append a parameter description.
    #[must_use]
    pub fn parameter(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// The parameter descriptions, in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Look up a parameter by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|spec| spec.id == id)
    }
}
