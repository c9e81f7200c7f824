pub use crate::domain::{Contact, Utc, Uuid};
pub use crate::errors::ValidationError;
pub use crate::registry::{ContactRegistry, RegistryIter};
pub use crate::validation::validate_required;
