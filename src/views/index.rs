use askama::Template;

use crate::models::todo::{NewTodo, Todo};
use crate::repository::database::TodoStats;

/// Model for the list page: `todos`, `newTodo`, `total` and `completed`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub todos: &'a [Todo],
    pub new_todo: NewTodo,
    pub total: usize,
    pub completed: usize,
}

impl<'a> IndexPage<'a> {
    pub fn new(todos: &'a [Todo], stats: TodoStats) -> Self {
        IndexPage {
            todos,
            new_todo: NewTodo::default(),
            total: stats.total,
            completed: stats.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: usize, completed: usize) -> TodoStats {
        TodoStats { total, completed }
    }

    #[test]
    fn renders_counts_and_items() {
        let mut done = Todo::new(2, "Build a Todo App");
        done.completed = true;
        let todos = vec![Todo::new(1, "Learn Spring Boot"), done];
        let html = IndexPage::new(&todos, stats(2, 1)).render().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<span id=\"total\">2</span>"));
        assert!(html.contains("<span id=\"completed\">1</span>"));
        assert!(html.contains("<span id=\"active\">1</span>"));
        assert!(html.contains("Learn Spring Boot"));
        assert!(html.contains("action=\"/complete/1\""));
        assert!(!html.contains("action=\"/complete/2\""));
        assert!(html.contains("action=\"/delete/2\""));
        assert!(html.contains("href=\"/clear\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn renders_empty_state() {
        let html = IndexPage::new(&[], stats(0, 0)).render().unwrap();
        assert!(html.contains("class=\"empty\""));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn titles_are_escaped_in_output() {
        let todos = vec![Todo::new(1, "<script>alert(1)</script> & co")];
        let html = IndexPage::new(&todos, stats(1, 0)).render().unwrap();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
        assert!(!html.contains("<script>"));
    }
}
