//! Model value object representing a backend model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Identifier of a model served by the inference backend (Value Object)
///
/// The backend addresses models by name (`tinyllama`, `llama3:8b`, ...), so
/// the identifier is kept verbatim. Only empty names are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Model(String);

impl Model {
    /// Create a model identifier
    ///
    /// # Panics
    /// Panics if the name is empty or only whitespace
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "Model name cannot be empty");
        Self(name)
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fast, cheap model used as primary, simple-path model and scout
    pub fn default_light() -> Model {
        Model::new("tinyllama")
    }

    /// Slow, capable model used as expert
    pub fn default_heavy() -> Model {
        Model::new("llama3:8b")
    }

    /// Get the default committee for majority voting
    pub fn default_committee() -> Vec<Model> {
        vec![
            Model::default_light(),
            Model::default_heavy(),
            Model::new("mistral:7b"),
        ]
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidModel(s.to_string()));
        }
        Ok(Model(trimmed.to_string()))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
