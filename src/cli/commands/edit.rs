//! `todo edit` command.

use crate::cli::args::Options;
use crate::cli::commands::{find_todo, save_and_render, Context, Handler};
use crate::domain::list::TodoList;
use crate::error::TodoError;

pub struct Edit;

impl Handler for Edit {
    fn run(
        &self,
        args: &[String],
        options: &Options,
        todos: &mut TodoList,
        ctx: &Context<'_>,
    ) -> Result<String, TodoError> {
        let todo = find_todo(args, todos)?;

        if let Some(description) = args.get(1) {
            todo.description.clone_from(description);
        }
        if let Some(urgency_level) = options.urgency_level {
            todo.urgency_level = urgency_level;
        }
        tracing::info!(id = todo.id, "edited todo");

        // Saved even when nothing changed.
        save_and_render(todos, ctx)
    }
}
