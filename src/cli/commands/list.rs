//! `todo list` command.

use crate::cli::args::Options;
use crate::cli::commands::{Context, Handler};
use crate::domain::list::TodoList;
use crate::error::TodoError;

pub struct List;

impl Handler for List {
    fn run(
        &self,
        _args: &[String],
        options: &Options,
        todos: &mut TodoList,
        ctx: &Context<'_>,
    ) -> Result<String, TodoError> {
        if options.show_all {
            ctx.render(todos.iter())
        } else {
            // Default: hide completed todos
            ctx.render(todos.active())
        }
    }
}
