//! Common types used throughout todo-pager
//!
//! Shared record definitions and constants used across multiple modules.

use serde::{Deserialize, Serialize};

/// Number of records in a full page
///
/// The screen always requests pages of this size; a response with fewer
/// records marks the end of the collection.
pub const PAGE_SIZE: u32 = 10;

/// One to-do entry as served by the remote collection
///
/// Immutable once received. The controller replaces its whole record
/// buffer on every successful fetch, so instances are never merged or
/// mutated across pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Owner of the entry
    pub user_id: u64,
    /// Entry id, unique within a page
    pub id: u64,
    /// Entry text
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_format() {
        let todo: Todo = serde_json::from_str(
            r#"{"userId": 7, "id": 42, "title": "delectus aut autem", "completed": false}"#,
        )
        .unwrap();

        assert_eq!(todo.user_id, 7);
        assert_eq!(todo.id, 42);
        assert_eq!(todo.title, "delectus aut autem");
        assert!(!todo.completed);
    }

    #[test]
    fn test_todo_serializes_camel_case() {
        let todo = Todo {
            user_id: 1,
            id: 2,
            title: "walk the dog".to_string(),
            completed: true,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 2);
        assert_eq!(json["completed"], true);
    }
}
