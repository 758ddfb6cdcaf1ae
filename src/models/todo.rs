//! Todo entity and its write payloads.

use serde::{Deserialize, Serialize};

/// A stored todo, as returned by the repository and cached verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields for a todo that does not exist yet; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub description: Option<String>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub description: Option<String>,
}

impl TodoPatch {
    /// Applies the provided fields to `todo` in place.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(description) = &self.description {
            todo.description = Some(description.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_json_omits_missing_description() {
        let todo = Todo {
            id: 1,
            title: "Test".into(),
            completed: false,
            description: None,
        };
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":1,"title":"Test","completed":false}"#);
    }

    #[test]
    fn test_todo_deserialize_defaults_completed() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"title":"Cached Test"}"#).unwrap();
        assert_eq!(todo.title, "Cached Test");
        assert!(!todo.completed);
        assert!(todo.description.is_none());
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut todo = Todo {
            id: 3,
            title: "Before".into(),
            completed: false,
            description: Some("keep me".into()),
        };
        let patch = TodoPatch {
            completed: Some(true),
            ..Default::default()
        };

        patch.apply_to(&mut todo);

        assert_eq!(todo.title, "Before");
        assert!(todo.completed);
        assert_eq!(todo.description.as_deref(), Some("keep me"));
    }
}
