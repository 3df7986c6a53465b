//! In-memory record store.
//!
//! Insertion-ordered, process-local, no persistence. The store owns all
//! records exclusively; callers mutate records only through `replace`.

use crate::{Status, Todo, TodoId};

/// Ordered collection of todo records.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo fixture used by the server binary and the scenario tests.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.append(Todo::with_identifier(
            TodoId::from("1234"),
            "Write talk for SPADC",
            Status::Completed,
        ));
        store.append(Todo::new("Present talk at SPADC", Status::Outstanding));
        store
    }

    /// Snapshot view in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Adds a record at the end.
    pub fn append(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    pub fn find_by_identifier(&self, identifier: &str) -> Option<&Todo> {
        self.todos
            .iter()
            .find(|t| t.identifier().as_str() == identifier)
    }

    /// Replaces the record with the given identifier, preserving its
    /// position. Returns false (store untouched) when the id is unknown.
    pub fn replace(&mut self, identifier: &str, updated: Todo) -> bool {
        match self
            .todos
            .iter_mut()
            .find(|t| t.identifier().as_str() == identifier)
        {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = TodoStore::new();
        store.append(Todo::with_identifier("1".into(), "A", Status::Outstanding));
        store.append(Todo::with_identifier("2".into(), "B", Status::Outstanding));
        let titles: Vec<&str> = store.list().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn find_by_identifier_hits_and_misses() {
        let store = TodoStore::seeded();
        assert_eq!(
            store.find_by_identifier("1234").map(|t| t.title()),
            Some("Write talk for SPADC")
        );
        assert!(store.find_by_identifier("nope").is_none());
    }

    #[test]
    fn replace_preserves_position() {
        let mut store = TodoStore::seeded();
        let flipped = store.find_by_identifier("1234").unwrap().toggled();
        assert!(store.replace("1234", flipped));

        // Still first, now Outstanding.
        let first = &store.list()[0];
        assert_eq!(first.identifier().as_str(), "1234");
        assert_eq!(first.status(), Status::Outstanding);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_unknown_id_leaves_store_unchanged() {
        let mut store = TodoStore::seeded();
        let before: Vec<Todo> = store.list().to_vec();
        let stray = Todo::new("stray", Status::Outstanding);
        assert!(!store.replace("unknown", stray));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn seeded_matches_demo_fixture() {
        let store = TodoStore::seeded();
        assert_eq!(store.len(), 2);
        let first = &store.list()[0];
        assert_eq!(first.identifier().as_str(), "1234");
        assert_eq!(first.title(), "Write talk for SPADC");
        assert_eq!(first.status(), Status::Completed);
        let second = &store.list()[1];
        assert_eq!(second.title(), "Present talk at SPADC");
        assert_eq!(second.status(), Status::Outstanding);
        assert!(!second.identifier().as_str().is_empty());
    }
}
