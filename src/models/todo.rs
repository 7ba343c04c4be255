use chrono::prelude::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Todo {
            id,
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Draft submitted by the add form. Only `title` is bound.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NewTodo {
    #[serde(default)]
    pub title: Option<String>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        NewTodo {
            title: Some(title.into()),
        }
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// The title as submitted, or `None` when it is missing or blank.
    pub fn accepted_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
    }
}
