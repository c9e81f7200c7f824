//! In-memory contact registry: add a contact, list contacts,
//! reject records with a missing first or last name.

pub mod domain;
pub mod errors;
pub mod prelude;
pub mod registry;
pub mod validation;
