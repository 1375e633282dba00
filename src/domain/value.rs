use crate::domain::validation::ValidationError;

/// Free-form request parameters and entity field maps, as sent to and received from Telerivet.
pub type Params = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Telerivet API key.
///
/// Invariant: non-empty after trimming. `Debug` never prints the key itself.
pub struct ApiKey(String);

impl ApiKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Name of a custom variable attached to an entity.
///
/// Invariant: 1 to 32 ASCII letters, digits or underscores.
pub struct VarName(String);

impl VarName {
    /// Maximum name length in characters.
    pub const MAX_LEN: usize = 32;

    /// Create a validated [`VarName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let valid = !value.is_empty()
            && value.len() <= Self::MAX_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_');
        if !valid {
            return Err(ValidationError::InvalidVarName { name: value });
        }
        Ok(Self(value))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
