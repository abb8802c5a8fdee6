//! The in-memory todo collection.

use crate::domain::todo::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    /// Build a list from already-validated todos.
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    /// Todos that are not completed.
    pub fn active(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|t| t.is_active())
    }

    #[cfg(test)]
    pub fn contains(&self, id: u32) -> bool {
        self.todos.iter().any(|t| t.id == id)
    }

    #[cfg(test)]
    pub fn get(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    /// One more than the highest id in use, or 1 for an empty list.
    ///
    /// Fails with the highest id when it is already `u32::MAX`.
    pub fn next_id(&self) -> Result<u32, u32> {
        match self.todos.iter().map(|t| t.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(max),
        }
    }

    pub fn push(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Remove every todo with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: u32) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        before - self.todos.len()
    }
}
