//! Environments and their variables

use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// A single environment variable row.
///
/// Variables live in an ordered list, not a map: duplicate keys are legal
/// and lookups take the first enabled match in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    /// Stable row identifier, unique within the owning environment.
    #[serde(default = "generate_id")]
    pub id: String,
    /// The variable name used in `{{name}}` placeholders
    pub key: String,
    /// The substituted value
    pub value: String,
    /// Whether this variable participates in resolution
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl EnvVariable {
    /// Creates a new enabled variable with a fresh id.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled variable.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(key, value)
        }
    }
}

/// A named, switchable set of variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Unique identifier
    #[serde(default = "generate_id")]
    pub id: String,
    /// Environment name (e.g., "Local", "Production")
    pub name: String,
    /// Variable rows in display/lookup order
    #[serde(default)]
    pub variables: Vec<EnvVariable>,
}

impl Environment {
    /// Creates a new empty environment with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            variables: Vec::new(),
        }
    }

    /// Appends a new variable row and returns its id.
    pub fn add_variable(&mut self, key: impl Into<String>, value: impl Into<String>) -> String {
        let variable = EnvVariable::new(key, value);
        let id = variable.id.clone();
        self.variables.push(variable);
        id
    }

    /// Replaces the variable row with the same id. No-op if absent.
    pub fn update_variable(&mut self, variable: EnvVariable) {
        if let Some(existing) = self.variables.iter_mut().find(|v| v.id == variable.id) {
            *existing = variable;
        }
    }

    /// Removes a variable row by id.
    pub fn remove_variable(&mut self, id: &str) {
        self.variables.retain(|v| v.id != id);
    }

    /// Renames the environment.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new("New Environment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_environment_new() {
        let env = Environment::new("Local");
        assert_eq!(env.name, "Local");
        assert!(env.variables.is_empty());
        assert!(!env.id.is_empty());
    }

    #[test]
    fn test_variable_crud() {
        let mut env = Environment::new("Test");
        let id = env.add_variable("host", "localhost");
        assert_eq!(env.variables.len(), 1);

        let mut updated = env.variables[0].clone();
        updated.value = "127.0.0.1".to_string();
        env.update_variable(updated);
        assert_eq!(env.variables[0].value, "127.0.0.1");

        env.remove_variable(&id);
        assert!(env.variables.is_empty());
    }

    #[test]
    fn test_update_missing_variable_is_noop() {
        let mut env = Environment::new("Test");
        env.add_variable("host", "localhost");
        env.update_variable(EnvVariable::new("other", "x"));
        assert_eq!(env.variables.len(), 1);
        assert_eq!(env.variables[0].key, "host");
    }

    #[test]
    fn test_duplicate_keys_are_legal() {
        let mut env = Environment::new("Test");
        env.add_variable("token", "first");
        env.add_variable("token", "second");
        assert_eq!(env.variables.len(), 2);
    }
}
