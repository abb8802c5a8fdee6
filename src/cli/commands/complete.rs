//! `todo complete` command.

use crate::cli::args::Options;
use crate::cli::commands::{find_todo, save_and_render, Context, Handler};
use crate::domain::list::TodoList;
use crate::error::TodoError;

pub struct Complete;

impl Handler for Complete {
    fn run(
        &self,
        args: &[String],
        _options: &Options,
        todos: &mut TodoList,
        ctx: &Context<'_>,
    ) -> Result<String, TodoError> {
        let todo = find_todo(args, todos)?;
        todo.completed = true;
        tracing::info!(id = todo.id, "completed todo");

        save_and_render(todos, ctx)
    }
}
