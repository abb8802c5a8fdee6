//! `todo delete` command.

use crate::cli::args::Options;
use crate::cli::commands::{parse_id, save_and_render, Context, Handler};
use crate::domain::list::TodoList;
use crate::error::TodoError;

pub struct Delete;

impl Handler for Delete {
    fn run(
        &self,
        args: &[String],
        _options: &Options,
        todos: &mut TodoList,
        ctx: &Context<'_>,
    ) -> Result<String, TodoError> {
        let id = parse_id(args)?;

        // Deleting an unknown id is not an error.
        let removed = todos.remove(id);
        tracing::info!(id, removed, "deleted todo");

        save_and_render(todos, ctx)
    }
}
