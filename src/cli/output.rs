//! Output formatting for todos (color, plain, JSON).

use crate::config::settings::SortOrder;
use crate::config::Config;
use crate::domain::todo::Todo;
use crate::error::TodoError;
use crate::storage::record::TodoRecord;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Color,
    Plain,
    Json,
}

impl OutputFormat {
    pub fn from_flags(json: bool, no_color: bool, config: &Config) -> Self {
        if json {
            Self::Json
        } else if no_color || !config.display.color || std::env::var_os("NO_COLOR").is_some() {
            Self::Plain
        } else {
            Self::Color
        }
    }
}

/// Format todos for display, one per line.
///
/// Returns an empty string when there is nothing to show, except in JSON
/// format where an empty array is rendered.
pub fn format_todo_list<'t>(
    todos: impl IntoIterator<Item = &'t Todo>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let mut todos: Vec<&Todo> = todos.into_iter().collect();
    sort_todos(&mut todos, config.display.sort);

    if format == OutputFormat::Json {
        let records: Vec<TodoRecord> = todos.into_iter().map(TodoRecord::from).collect();
        return serde_json::to_string_pretty(&records).map_err(TodoError::Output);
    }

    Ok(todos
        .into_iter()
        .map(|todo| format_todo(todo, config, format))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn format_todo(todo: &Todo, config: &Config, format: OutputFormat) -> String {
    let label = todo.label(config.display.id_width);
    match format {
        OutputFormat::Color if todo.completed => label.bright_black().bold().to_string(),
        OutputFormat::Color => label.color(config.color_for(todo.urgency_level)).bold().to_string(),
        _ => label,
    }
}

fn sort_todos(todos: &mut [&Todo], order: SortOrder) {
    match order {
        SortOrder::Id => todos.sort_by_key(|t| t.id),
        SortOrder::Urgency => todos.sort_by_key(|t| (t.urgency_level.rank(), t.id)),
        SortOrder::Unsorted => {}
    }
}
