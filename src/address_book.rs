//! In-memory contact model with a replaceable filtered view.
//!
//! The book owns the full contact collection plus the subset currently
//! exposed to the interface. Searches replace the view wholesale; they never
//! compose with a previous filter.

use crate::contact::Contact;

#[derive(Debug, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
    // Indices into `contacts`, so the view is a subset by construction.
    visible: Vec<usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        let visible = (0..contacts.len()).collect();
        Self { contacts, visible }
    }

    /// Full collection, unaffected by the current filter.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts currently exposed to the interface.
    pub fn visible_contacts(&self) -> impl Iterator<Item = &Contact> {
        self.visible.iter().map(|&i| &self.contacts[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
        self.reset_view();
    }

    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let idx = self.contacts.iter().position(|c| c.name == name)?;
        let removed = self.contacts.remove(idx);
        self.reset_view();
        Some(removed)
    }

    /// Replace the filtered view with the contacts matching `predicate`.
    ///
    /// The new view is computed over the full collection and published with a
    /// single assignment, so readers never observe a partially built view.
    pub fn update_filtered_view<P>(&mut self, predicate: P)
    where
        P: Fn(&Contact) -> bool,
    {
        let visible: Vec<usize> = self
            .contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| predicate(contact))
            .map(|(i, _)| i)
            .collect();
        self.visible = visible;
    }

    /// Make every contact visible again.
    pub fn reset_view(&mut self) {
        self.visible = (0..self.contacts.len()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn book_with(names: &[&str]) -> AddressBook {
        AddressBook::from_contacts(names.iter().map(|&name| Contact::new(name)).collect())
    }

    fn visible_names(book: &AddressBook) -> Vec<&str> {
        book.visible_contacts().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn new_book_shows_everything() {
        let book = book_with(&["Alice", "Bob"]);
        assert_eq!(visible_names(&book), vec!["Alice", "Bob"]);
    }

    #[test]
    fn filter_replaces_rather_than_composes() {
        let mut book = book_with(&["Alice", "Bob", "Carol"]);

        book.update_filtered_view(|c| c.name == "Alice");
        assert_eq!(visible_names(&book), vec!["Alice"]);

        // A second filter is applied to the full collection, not to the
        // previous view: Bob is reachable even though Alice's filter hid him.
        book.update_filtered_view(|c| c.name == "Bob");
        assert_eq!(visible_names(&book), vec!["Bob"]);
    }

    #[test]
    fn filter_to_nothing_keeps_full_collection_intact() {
        let mut book = book_with(&["Alice"]);
        book.update_filtered_view(|_| false);
        assert_eq!(book.visible_len(), 0);
        assert_eq!(book.len(), 1);

        book.reset_view();
        assert_eq!(visible_names(&book), vec!["Alice"]);
    }

    #[test]
    fn mutations_reset_the_view() {
        let mut book = book_with(&["Alice", "Bob"]);
        book.update_filtered_view(|c| c.name == "Alice");

        book.add(Contact::new("Carol"));
        assert_eq!(visible_names(&book), vec!["Alice", "Bob", "Carol"]);

        book.remove("Bob");
        assert_eq!(visible_names(&book), vec!["Alice", "Carol"]);
        assert!(book.find("Bob").is_none());
    }
}
