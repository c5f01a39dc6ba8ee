use crate::domain::{
    sorting::{ordered_for_display, Completable},
    todo::{Todo, TodoId},
    validation::{self, TODO_NAME},
};
use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a list, unique within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u32);

impl ListId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Next id after the highest one in use, or 1 when there is none
    pub fn next_after<'a>(ids: impl IntoIterator<Item = &'a ListId>) -> Result<Self> {
        match ids.into_iter().max() {
            Some(id) => id
                .0
                .checked_add(1)
                .map(Self)
                .ok_or(TodoError::IdsExhausted("list")),
            None => Ok(Self(1)),
        }
    }
}

impl FromStr for ListId {
    type Err = TodoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| TodoError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named list of todos, kept in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl List {
    pub fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
        }
    }

    pub fn todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    fn todo_mut(&mut self, todo_id: TodoId) -> Result<&mut Todo> {
        let list_id = self.id;
        self.todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or(TodoError::TodoNotFound {
                list: list_id,
                todo: todo_id,
            })
    }

    /// Appends a new incomplete todo
    pub fn add_todo(&mut self, text: &str) -> Result<&Todo> {
        validation::check_length(TODO_NAME, text)?;

        let id = TodoId::next_after(self.todos.iter().map(|todo| &todo.id))?;
        self.todos.push(Todo::new(id, text.to_string()));
        tracing::debug!(list_id = %self.id, todo_id = %id, "todo added");

        Ok(&self.todos[self.todos.len() - 1])
    }

    /// Removes a todo, keeping the order of the others
    pub fn remove_todo(&mut self, todo_id: TodoId) -> Result<Todo> {
        let pos = self
            .todos
            .iter()
            .position(|todo| todo.id == todo_id)
            .ok_or(TodoError::TodoNotFound {
                list: self.id,
                todo: todo_id,
            })?;

        let removed = self.todos.remove(pos);
        tracing::debug!(list_id = %self.id, todo_id = %todo_id, "todo removed");
        Ok(removed)
    }

    pub fn set_todo_completed(&mut self, todo_id: TodoId, completed: bool) -> Result<()> {
        let todo = self.todo_mut(todo_id)?;
        if completed {
            todo.mark_completed();
        } else {
            todo.mark_incomplete();
        }
        tracing::debug!(list_id = %self.id, todo_id = %todo_id, completed, "todo updated");
        Ok(())
    }

    pub fn complete_all(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_completed);
        tracing::debug!(list_id = %self.id, count = self.todos.len(), "all todos completed");
    }

    /// A list is complete when it has todos and all of them are done
    pub fn is_complete(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.todos.len() - self.completed_count()
    }

    /// CSS class for the list row
    pub fn css_class(&self) -> Option<&'static str> {
        self.is_complete().then_some("complete")
    }

    /// Todos with incomplete ones first; storage order is untouched
    pub fn todos_for_display(&self) -> Vec<&Todo> {
        ordered_for_display(&self.todos, Todo::is_done)
    }
}

impl Completable for Todo {
    fn is_done(&self) -> bool {
        self.completed
    }
}

impl Completable for List {
    fn is_done(&self) -> bool {
        self.is_complete()
    }
}
