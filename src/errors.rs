use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingFirstName,
    MissingLastName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFirstName => {
                write!(f, "Validation failed: first name is required")
            }
            ValidationError::MissingLastName => {
                write!(f, "Validation failed: last name is required")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
