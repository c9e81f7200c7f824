use crate::domain::Contact;
use crate::errors::ValidationError;
use crate::validation::validate_required;

/// Ordered in-memory container of contacts for one session.
/// Grows only through `add_contact`; no delete, no deduplication.
#[derive(Debug, Default)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Validates the names, then appends a freshly built contact and
    /// returns it. A failed validation leaves the stored sequence
    /// untouched.
    pub fn add_contact(
        &mut self,
        first_name: String,
        last_name: String,
        phone: String,
    ) -> Result<Contact, ValidationError> {
        if !validate_required(&first_name) {
            return Err(ValidationError::MissingFirstName);
        }

        if !validate_required(&last_name) {
            return Err(ValidationError::MissingLastName);
        }

        let contact = Contact::new(first_name, last_name, phone);
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    /// All contacts in insertion order. Empty slice for a fresh registry.
    pub fn all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Point-in-time owned copy, unaffected by later adds.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.to_vec()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> RegistryIter<'_> {
        RegistryIter {
            inner: &self.contacts,
            idx: 0,
        }
    }
}

pub struct RegistryIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for RegistryIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some(contact)
    }
}
