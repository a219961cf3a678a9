use crate::types::{Todo, TodoId};
use std::sync::{Mutex, MutexGuard};

/// Errors raised by the todo store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Todo with id {0} not found")]
    NotFound(TodoId),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
struct StoreState {
    todos: Vec<Todo>,
    next_id: u64,
}

/// In-memory todo store
///
/// Items are kept in insertion order. Ids come from a counter that only
/// moves forward, so a deleted id is never handed out again. All mutations
/// go through a single mutex.
#[derive(Debug)]
pub struct TodoStore {
    state: Mutex<StoreState>,
}

impl TodoStore {
    /// Create an empty store whose first id is 1
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        // A panic while holding the lock cannot leave the Vec half-mutated,
        // so a poisoned guard is still consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a new, not yet completed item
    pub fn create(&self, text: impl Into<String>) -> Todo {
        let mut state = self.state();
        let todo = Todo {
            id: TodoId(state.next_id),
            text: text.into(),
            completed: false,
        };
        state.next_id += 1;
        state.todos.push(todo.clone());

        tracing::debug!("Created todo {}", todo.id);
        todo
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<Todo> {
        self.state().todos.clone()
    }

    /// Set the completion flag of an existing item
    pub fn update(&self, id: TodoId, completed: bool) -> StoreResult<Todo> {
        let mut state = self.state();
        let todo = state
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        todo.completed = completed;
        tracing::debug!("Updated todo {} (completed: {})", id, completed);
        Ok(todo.clone())
    }

    /// Remove an item. Its id stays retired.
    pub fn delete(&self, id: TodoId) -> StoreResult<()> {
        let mut state = self.state();
        let index = state
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        state.todos.remove(index);
        tracing::debug!("Deleted todo {}", id);
        Ok(())
    }

    /// Number of items currently stored
    pub fn len(&self) -> usize {
        self.state().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next `create` will assign
    pub fn next_id(&self) -> TodoId {
        TodoId(self.state().next_id)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = TodoStore::new();

        let milk = store.create("buy milk");
        let dog = store.create("walk dog");

        assert_eq!(milk.id, TodoId(1));
        assert_eq!(milk.text, "buy milk");
        assert!(!milk.completed);
        assert_eq!(dog.id, TodoId(2));
        assert_eq!(store.next_id(), TodoId(3));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = TodoStore::new();
        store.create("first");
        store.create("second");
        store.create("third");

        let texts: Vec<_> = store.list().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_update_only_touches_target() {
        let store = TodoStore::new();
        let a = store.create("a");
        let b = store.create("b");

        let updated = store.update(a.id, true).unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.text, "a");
        assert!(updated.completed);

        let todos = store.list();
        assert!(todos[0].completed);
        assert_eq!(todos[1], b);

        let reverted = store.update(a.id, false).unwrap();
        assert!(!reverted.completed);
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let store = TodoStore::new();
        store.create("a");
        let before = store.list();

        let err = store.update(TodoId(99), true).unwrap_err();
        assert_eq!(err, StoreError::NotFound(TodoId(99)));
        assert_eq!(err.to_string(), "Todo with id 99 not found");
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = TodoStore::new();
        let a = store.create("a");
        let b = store.create("b");
        let c = store.create("c");

        store.delete(b.id).unwrap();

        assert_eq!(store.list(), vec![a, c]);
        assert_eq!(store.delete(b.id), Err(StoreError::NotFound(b.id)));
    }

    #[test]
    fn test_ids_not_reused_after_deleting_highest() {
        let store = TodoStore::new();
        store.create("a");
        let b = store.create("b");
        store.delete(b.id).unwrap();

        let c = store.create("c");
        assert_eq!(c.id, TodoId(3));
    }

    #[test]
    fn test_concurrent_creates_yield_distinct_ids() {
        let store = Arc::new(TodoStore::new());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        store.create(format!("{n}-{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<_> = store.list().into_iter().map(|t| t.id.0).collect();
        assert_eq!(ids.len(), 200);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(store.next_id(), TodoId(201));
    }

    #[test]
    fn test_todo_serializes_flat_id() {
        let store = TodoStore::new();
        let todo = store.create("buy milk");

        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "text": "buy milk", "completed": false})
        );
    }
}
