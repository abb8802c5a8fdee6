//! On-disk record shape and validation of the todo document.

use crate::domain::list::TodoList;
use crate::domain::todo::Todo;
use crate::domain::urgency::Urgency;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One todo as stored in the backing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: i64,
    pub description: String,
    #[serde(default)]
    pub urgency_level: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl From<&Todo> for TodoRecord {
    fn from(todo: &Todo) -> Self {
        Self {
            id: i64::from(todo.id),
            description: todo.description.clone(),
            urgency_level: Some(todo.urgency_level.as_str().to_string()),
            completed: todo.completed,
        }
    }
}

impl TodoRecord {
    /// Validate the id and normalize the urgency level.
    pub fn into_todo(self) -> anyhow::Result<Todo> {
        let id = match u32::try_from(self.id) {
            Ok(id) if id > 0 => id,
            _ => bail!("todo id must be a positive integer, got {}", self.id),
        };

        let urgency_level = Urgency::normalize(self.urgency_level.as_deref());
        if let Some(raw) = self.urgency_level.as_deref() {
            if Urgency::parse(raw).is_none() {
                tracing::warn!(id, urgency_level = raw, "unknown urgency level, using default");
            }
        }

        Ok(Todo {
            id,
            description: self.description,
            urgency_level,
            completed: self.completed,
        })
    }
}

/// Parse the whole document into a collection.
pub fn decode(content: &str) -> anyhow::Result<TodoList> {
    let records: Vec<TodoRecord> =
        serde_json::from_str(content).context("todo file is not a valid list of todos")?;

    let mut seen = HashSet::new();
    let mut todos = Vec::with_capacity(records.len());
    for record in records {
        let todo = record.into_todo()?;
        if !seen.insert(todo.id) {
            bail!("duplicate todo id {}", todo.id);
        }
        todos.push(todo);
    }
    Ok(TodoList::from_todos(todos))
}

/// Serialize the whole collection.
pub fn encode(list: &TodoList) -> serde_json::Result<String> {
    let records: Vec<TodoRecord> = list.iter().map(TodoRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
