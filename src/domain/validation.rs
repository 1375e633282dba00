use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidVarName { name: String },
    VarValueTooLong { name: String, max: usize, actual: usize },
    UnsupportedVarValue { name: String },
    VarsNotObject,
    CountParam,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidVarName { name } => write!(
                f,
                "invalid custom variable name: {name:?} (expected 1-32 letters, digits or underscores)"
            ),
            Self::VarValueTooLong { name, max, actual } => write!(
                f,
                "custom variable {name} is too long: {actual} bytes (max {max})"
            ),
            Self::UnsupportedVarValue { name } => write!(
                f,
                "custom variable {name} must be a string, number, bool or null"
            ),
            Self::VarsNotObject => write!(f, "vars must be a JSON object"),
            Self::CountParam => write!(
                f,
                "cannot construct a cursor with the 'count' parameter; call total_count() instead"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "api_key" };
        assert_eq!(err.to_string(), "api_key must not be empty");

        let err = ValidationError::VarValueTooLong {
            name: "notes".to_owned(),
            max: 4096,
            actual: 5000,
        };
        assert_eq!(
            err.to_string(),
            "custom variable notes is too long: 5000 bytes (max 4096)"
        );

        let err = ValidationError::UnsupportedVarValue {
            name: "nested".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "custom variable nested must be a string, number, bool or null"
        );

        assert!(
            ValidationError::CountParam
                .to_string()
                .ends_with("call total_count() instead")
        );
        assert_eq!(
            ValidationError::VarsNotObject.to_string(),
            "vars must be a JSON object"
        );
    }
}
