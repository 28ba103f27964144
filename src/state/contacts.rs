// Contact record store
// Ordered sequence of contacts; ids derive from the collection length

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identifier for a contact
pub type ContactId = u64;

/// Contact store shared between request handlers
pub type SharedContactStore = Arc<RwLock<ContactStore>>;

/// A stored contact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Position-derived identifier (length + 1 at insertion)
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Phone number, digits only
    pub phone: String,
}

/// In-memory contact store
///
/// Ids are `len + 1` at insertion time. That is only unique because contacts
/// can never be removed; adding a delete operation requires switching to a
/// monotonic counter like [`crate::state::StudentStore`] uses.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store for sharing across handlers
    pub fn shared() -> SharedContactStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Append a contact and return it
    pub fn create(&mut self, name: String, phone: String) -> Contact {
        let contact = Contact {
            id: self.contacts.len() as ContactId + 1,
            name,
            phone,
        };
        self.contacts.push(contact.clone());
        contact
    }

    /// All contacts in insertion order
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts whose name contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let needle = term.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Get the number of contacts in the store
    pub(crate) fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
