use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::todo::{NewTodo, Todo};

const SAMPLE_TITLES: [&str; 3] = ["Learn Spring Boot", "Build a Todo App", "Deploy with Jenkins"];

#[derive(Debug)]
struct State {
    todos: Vec<Todo>,
    next_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
}

impl TodoStats {
    fn of(todos: &[Todo]) -> Self {
        TodoStats {
            total: todos.len(),
            completed: todos.iter().filter(|todo| todo.is_completed()).count(),
        }
    }
}

/// In-memory todo store shared by every worker.
///
/// A single lock guards both the list and the id counter, so an id is
/// handed out and its item appended in one step.
#[derive(Debug)]
pub struct Database {
    state: Mutex<State>,
}

impl Default for Database {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Database {
    pub fn new() -> Self {
        Database {
            state: Mutex::new(State {
                todos: vec![],
                next_id: 1,
            }),
        }
    }

    /// A store holding the three sample items, ids 1 to 3.
    pub fn seeded() -> Self {
        let db = Self::new();
        for title in SAMPLE_TITLES {
            db.add_todo(NewTodo::new(title));
        }
        db
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_todos(&self) -> Vec<Todo> {
        let state = self.lock();
        state.todos.clone()
    }

    /// Snapshot of the list and its counts taken under one lock.
    pub fn snapshot(&self) -> (Vec<Todo>, TodoStats) {
        let state = self.lock();
        (state.todos.clone(), TodoStats::of(&state.todos))
    }

    pub fn add_todo(&self, new_todo: NewTodo) -> Option<Todo> {
        let title = new_todo.accepted_title()?;
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        let todo = Todo::new(id, title);
        state.todos.push(todo.clone());
        tracing::debug!(id, title = %todo.title, "todo added");
        Some(todo)
    }

    pub fn complete_todo(&self, id: i64) -> bool {
        let mut state = self.lock();
        match state.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = true;
                tracing::debug!(id, "todo completed");
                true
            }
            None => false,
        }
    }

    pub fn delete_todo(&self, id: i64) -> bool {
        let mut state = self.lock();
        let before = state.todos.len();
        state.todos.retain(|todo| todo.id != id);
        let removed = before != state.todos.len();
        if removed {
            tracing::debug!(id, "todo deleted");
        }
        removed
    }

    pub fn clear_completed(&self) -> usize {
        let mut state = self.lock();
        let before = state.todos.len();
        state.todos.retain(|todo| !todo.is_completed());
        let removed = before - state.todos.len();
        tracing::debug!(removed, "completed todos cleared");
        removed
    }
}
